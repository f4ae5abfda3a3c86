use blockfall::core::{Board, GameLoop, GameSnapshot, Piece, Shuffler};
use blockfall::term::{shape_color, GameView, Viewport};
use blockfall::types::{Cell, Rotation, Shape, GRAVITY_INTERVAL_MS};

fn glyph_at(fb: &blockfall::term::FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|g| g.ch).unwrap_or('?')
}

#[test]
fn test_frame_fits_exactly_in_its_own_size() {
    let view = GameView::default();
    let fb = view.render(&GameSnapshot::default(), Viewport::new(22, 22));

    assert_eq!(glyph_at(&fb, 0, 0), '┌');
    assert_eq!(glyph_at(&fb, 21, 0), '┐');
    assert_eq!(glyph_at(&fb, 0, 21), '└');
    assert_eq!(glyph_at(&fb, 21, 21), '┘');
    assert_eq!(glyph_at(&fb, 10, 0), '─');
    assert_eq!(glyph_at(&fb, 0, 10), '│');
}

#[test]
fn test_cells_are_two_columns_wide() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Some(Shape::Z);
    let fb = view.render(&snap, Viewport::new(22, 22));

    for x in [1, 2] {
        let glyph = fb.get(x, 20).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, shape_color(Shape::Z));
    }
    assert_eq!(glyph_at(&fb, 3, 20), '·');
    assert_eq!(glyph_at(&fb, 4, 20), '·');
}

#[test]
fn test_active_piece_is_drawn() {
    // The default snapshot holds an I at spawn: column 4, rows 0 to 3.
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for cell in snap.active.cells {
        let x = 1 + 2 * cell.col as u16;
        let y = 1 + cell.row as u16;
        assert_eq!(glyph_at(&fb, x, y), '█');
        assert_eq!(glyph_at(&fb, x + 1, y), '█');
    }
    assert_eq!(glyph_at(&fb, 1, 1), '·');
}

#[test]
fn test_off_board_blocks_are_not_drawn() {
    // A flat I hanging one block past the left wall, as unchecked rotation allows.
    let active = Piece::new(Shape::I, Rotation::Two, Cell::new(0, 5));
    let game = GameLoop::from_parts(Board::new(), active, Shuffler::new(4), GRAVITY_INTERVAL_MS);
    let snap = game.snapshot();

    let on_board = snap.active.cells.iter().filter(|c| c.in_bounds()).count();
    assert_eq!(on_board, 3);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    for y in 1..21 {
        assert_eq!(glyph_at(&fb, 0, y), '│');
        assert_eq!(glyph_at(&fb, 21, y), '│');
    }
    let drawn = (0..20u16)
        .flat_map(|row| (0..10u16).map(move |col| (col, row)))
        .filter(|&(col, row)| glyph_at(&fb, 1 + 2 * col, 1 + row) == '█')
        .count();
    assert_eq!(drawn, on_board);
    assert!(fb.row_text(7).starts_with("│██████··"));
}

#[test]
fn test_oversized_cells_do_not_overflow() {
    let view = GameView::new(7000, 7000);
    let (w, h) = view.frame_size();
    assert!(w > 22 && h > 22);

    let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));
}

#[test]
fn test_side_panel_needs_room() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.pieces_spawned = 12;
    snap.lines_cleared = 3;

    let narrow = view.render(&snap, Viewport::new(22, 22));
    assert!((0..22).all(|y| !narrow.row_text(y).contains("PIECES")));

    // 80 wide: board at x 29..51, panel starts at x 53, top row 1.
    let wide = view.render(&snap, Viewport::new(80, 24));
    assert!(wide.row_text(1).contains("PIECES"));
    assert!(wide.row_text(2).contains("12"));
    assert!(wide.row_text(4).contains("LINES"));
    assert!(wide.row_text(5).contains('3'));
    assert!(wide.row_text(8).contains('I'));
}

#[test]
fn test_topped_out_banner() {
    let mut snap = GameSnapshot::default();
    assert!(!GameView::default()
        .render(&snap, Viewport::new(22, 22))
        .row_text(11)
        .contains("TOPPED OUT"));

    snap.topped_out = true;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("TOPPED OUT"));
}

#[test]
fn test_render_into_reuses_buffer_across_sizes() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let mut fb = blockfall::term::FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(30, 25), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 25));
    view.render_into(&snap, Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));
    assert_eq!(fb, view.render(&snap, Viewport::new(22, 22)));
}
