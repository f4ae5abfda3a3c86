//! Rotation table - block offsets for every shape and rotation state
//!
//! Offsets are (Δcol, Δrow) from the piece anchor, with rows growing downward.
//! The table is total over all 7 x 4 combinations: O uses one set for every
//! state, and I, S, Z alternate between two sets.

use crate::types::{Offset, Rotation, Shape};

/// Shape of a piece - 4 block offsets from the anchor
pub type PieceShape = [Offset; 4];

const I_VERTICAL: PieceShape = [(0, 0), (0, 1), (0, 2), (0, 3)];
const I_HORIZONTAL: PieceShape = [(-1, 1), (0, 1), (1, 1), (2, 1)];

const O_SQUARE: PieceShape = [(-1, 0), (0, 0), (0, 1), (-1, 1)];

const S_FLAT: PieceShape = [(0, 0), (1, 0), (0, 1), (-1, 1)];
const S_UPRIGHT: PieceShape = [(-1, 0), (-1, 1), (0, 1), (0, 2)];

const Z_FLAT: PieceShape = [(-1, 0), (0, 0), (0, 1), (1, 1)];
const Z_UPRIGHT: PieceShape = [(0, 0), (0, 1), (-1, 1), (-1, 2)];

/// Get the block offsets for a shape in a rotation state
pub fn offsets(shape: Shape, rotation: Rotation) -> PieceShape {
    match shape {
        Shape::I => alternating(rotation, I_VERTICAL, I_HORIZONTAL),
        Shape::O => O_SQUARE,
        Shape::S => alternating(rotation, S_FLAT, S_UPRIGHT),
        Shape::Z => alternating(rotation, Z_FLAT, Z_UPRIGHT),
        Shape::T => t_offsets(rotation),
        Shape::J => j_offsets(rotation),
        Shape::L => l_offsets(rotation),
    }
}

/// Two-state shapes: states 1 and 3 share `odd`, 2 and 4 share `even`
fn alternating(rotation: Rotation, odd: PieceShape, even: PieceShape) -> PieceShape {
    match rotation {
        Rotation::One | Rotation::Three => odd,
        Rotation::Two | Rotation::Four => even,
    }
}

fn t_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        // stem up
        Rotation::One => [(0, 0), (0, 1), (-1, 1), (1, 1)],
        // stem right
        Rotation::Two => [(0, 0), (0, 1), (0, 2), (1, 1)],
        // stem down
        Rotation::Three => [(-1, 1), (0, 1), (1, 1), (0, 2)],
        // stem left
        Rotation::Four => [(0, 0), (0, 1), (0, 2), (-1, 1)],
    }
}

fn j_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::One => [(0, 0), (0, 1), (0, 2), (-1, 2)],
        Rotation::Two => [(-1, 0), (-1, 1), (0, 1), (1, 1)],
        Rotation::Three => [(0, 0), (1, 0), (0, 1), (0, 2)],
        Rotation::Four => [(-1, 1), (0, 1), (1, 1), (1, 2)],
    }
}

fn l_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::One => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Rotation::Two => [(0, 1), (1, 1), (-1, 1), (-1, 2)],
        Rotation::Three => [(0, 0), (-1, 0), (0, 1), (0, 2)],
        Rotation::Four => [(0, 1), (1, 1), (1, 0), (-1, 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::One,
        Rotation::Two,
        Rotation::Three,
        Rotation::Four,
    ];

    #[test]
    fn every_entry_has_four_distinct_offsets() {
        for shape in Shape::ALL {
            for rotation in ROTATIONS {
                let shape_offsets = offsets(shape, rotation);
                for (i, a) in shape_offsets.iter().enumerate() {
                    for b in &shape_offsets[i + 1..] {
                        assert_ne!(a, b, "{:?} {:?} repeats an offset", shape, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn o_never_changes() {
        for rotation in ROTATIONS {
            assert_eq!(offsets(Shape::O, rotation), O_SQUARE);
        }
    }

    #[test]
    fn symmetric_shapes_repeat_every_two_states() {
        for shape in [Shape::I, Shape::S, Shape::Z] {
            assert_eq!(offsets(shape, Rotation::One), offsets(shape, Rotation::Three));
            assert_eq!(offsets(shape, Rotation::Two), offsets(shape, Rotation::Four));
            assert_ne!(offsets(shape, Rotation::One), offsets(shape, Rotation::Two));
        }
    }

    #[test]
    fn asymmetric_shapes_have_four_distinct_states() {
        for shape in [Shape::T, Shape::J, Shape::L] {
            for (i, a) in ROTATIONS.iter().enumerate() {
                for b in &ROTATIONS[i + 1..] {
                    let mut sa = offsets(shape, *a);
                    let mut sb = offsets(shape, *b);
                    sa.sort();
                    sb.sort();
                    assert_ne!(sa, sb, "{:?}: {:?} equals {:?}", shape, a, b);
                }
            }
        }
    }

    #[test]
    fn no_offset_reaches_above_the_anchor() {
        for shape in Shape::ALL {
            for rotation in ROTATIONS {
                assert!(offsets(shape, rotation).iter().all(|&(_, dr)| dr >= 0));
            }
        }
    }
}
