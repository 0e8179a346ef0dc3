use crate::{Board, NUM_CELLS};

fn render_grid(cell_chars: [char; NUM_CELLS]) -> String {
    let mut result = String::new();
    for row in 0..3 {
        if row > 0 {
            result += "---|---|---\n";
        }
        let c = &cell_chars[3 * row..3 * row + 3];
        result += &format!(" {} | {} | {} \n", c[0], c[1], c[2]);
    }
    result
}

/// Renders the board as a 3x3 grid, with empty cells left blank.
pub fn render_board(board: &Board) -> String {
    let mut chars = [' '; NUM_CELLS];
    for (i, c) in chars.iter_mut().enumerate() {
        if let Some(mark) = board.get(i) {
            *c = mark.as_char();
        }
    }
    render_grid(chars)
}

/// Renders the grid with each cell showing its 1-based label, the way
/// moves are entered by the user.
pub fn render_cell_numbers() -> String {
    let mut chars = [' '; NUM_CELLS];
    for (i, c) in chars.iter_mut().enumerate() {
        *c = (b'1' + i as u8) as char;
    }
    render_grid(chars)
}
