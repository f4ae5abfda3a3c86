//! GameView: maps a settled `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It owns every visual decision: the board
//! frame, the faint grid, and the colour of each shape.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Shape, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(40, 40, 40);
const FRAME_FG: Rgb = Rgb::new(200, 200, 200);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);

/// Largest cell size `GameView::new` accepts, per axis.
pub const MAX_CELL_SIZE: u16 = 8;

const BLOCK: char = '█';
const GRID_DOT: char = '·';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colour of a shape's blocks.
pub fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(0x44, 0xbb, 0xa4),
        Shape::O => Rgb::new(0x64, 0xa8, 0xe1),
        Shape::T => Rgb::new(0xfa, 0xe1, 0x21),
        Shape::S => Rgb::new(0xfa, 0x79, 0x21),
        Shape::Z => Rgb::new(0x39, 0x43, 0xb7),
        Shape::J => Rgb::new(0xe9, 0x4f, 0x37),
        Shape::L => Rgb::new(0xe7, 0x34, 0xba),
    }
}

/// Renders the board centred in the viewport, with a side panel when there
/// is room for one.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen position of the board frame's top-left corner.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Frame size including the one-character border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_frame(fb, origin, frame_w, frame_h);

        for (row, line) in snap.board.iter().enumerate() {
            for (col, slot) in line.iter().enumerate() {
                let glyph = match slot {
                    Some(shape) => block_glyph(*shape),
                    None => CellStyle::plain(GRID_FG, BOARD_BG).glyph(GRID_DOT),
                };
                self.fill_cell(fb, origin, col as u16, row as u16, glyph);
            }
        }

        // Rotation can push blocks outside the board; only on-board ones are drawn.
        let glyph = block_glyph(snap.active.shape);
        for cell in snap.active.cells.iter().filter(|c| c.in_bounds()) {
            self.fill_cell(fb, origin, cell.col as u16, cell.row as u16, glyph);
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.topped_out {
            self.draw_banner(fb, origin, frame_w, frame_h, "TOPPED OUT");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16) {
        let style = CellStyle::plain(FRAME_FG, BOARD_BG);
        let (right, bottom) = (o.x + w - 1, o.y + h - 1);

        fb.put(o.x, o.y, style.glyph('┌'));
        fb.put(right, o.y, style.glyph('┐'));
        fb.put(o.x, bottom, style.glyph('└'));
        fb.put(right, bottom, style.glyph('┘'));
        for x in o.x + 1..right {
            fb.put(x, o.y, style.glyph('─'));
            fb.put(x, bottom, style.glyph('─'));
        }
        for y in o.y + 1..bottom {
            fb.put(o.x, y, style.glyph('│'));
            fb.put(right, y, style.glyph('│'));
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, o: Origin, col: u16, row: u16, glyph: Glyph) {
        let x = o.x + 1 + col * self.cell_w;
        let y = o.y + 1 + row * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, glyph);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        o: Origin,
        frame_w: u16,
    ) {
        let x = o.x.saturating_add(frame_w).saturating_add(2);
        if x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(TEXT_FG, BOARD_BG)
        };
        let value = CellStyle::plain(TEXT_FG, BOARD_BG);
        let hint = CellStyle {
            dim: true,
            ..value
        };

        let mut y = o.y;
        fb.put_str(x, y, "PIECES", label);
        fb.put_u32(x, y + 1, snap.pieces_spawned, value);
        y += 3;
        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, snap.lines_cleared, value);
        y += 3;
        fb.put_str(x, y, "PIECE", label);
        fb.put(x, y + 1, block_glyph(snap.active.shape));
        fb.put_str(x + 2, y + 1, snap.active.shape.as_str(), value);
        y += 3;

        for line in ["←/→  move", "↓    drop", "spc  rotate", "r    restart", "q    quit"] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, o: Origin, frame_w: u16, frame_h: u16, text: &str) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), BOARD_BG)
        };
        let text_w = text.chars().count() as u16;
        let x = o.x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, o.y + frame_h / 2, text, style);
    }
}

fn block_glyph(shape: Shape) -> Glyph {
    CellStyle {
        bold: true,
        ..CellStyle::plain(shape_color(shape), BOARD_BG)
    }
    .glyph(BLOCK)
}
