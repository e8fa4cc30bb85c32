//! Move notation: column letter followed by a 1-based row ("A1", "k11")

use thiserror::Error;

use crate::board::Coord;

/// Reasons a move string is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("move '{0}' is too short, expected a column letter and a row number")]
    TooShort(String),
    #[error("'{0}' is not a column letter")]
    BadColumn(char),
    #[error("'{0}' is not a row number")]
    BadRow(String),
    #[error("{text} is off a {size}x{size} board")]
    OutOfRange { text: String, size: usize },
}

/// Letter for a column index (0 -> 'A')
pub fn col_label(col: usize) -> char {
    debug_assert!(col < 26);
    (b'A' + col as u8) as char
}

pub fn format_move(mv: Coord) -> String {
    format!("{}{}", col_label(mv.col), mv.row + 1)
}

/// Parse a move for a board of side `size`. Case-insensitive, surrounding
/// whitespace ignored.
pub fn parse_move(text: &str, size: usize) -> Result<Coord, NotationError> {
    let text = text.trim().to_ascii_uppercase();
    if text.len() < 2 {
        return Err(NotationError::TooShort(text));
    }
    let col_char = text.chars().next().unwrap_or_default();
    let rest = &text[col_char.len_utf8()..];
    if !col_char.is_ascii_uppercase() {
        return Err(NotationError::BadColumn(col_char));
    }
    if !rest.chars().all(|c| c.is_ascii_digit()) {
        return Err(NotationError::BadRow(rest.to_string()));
    }
    let row: usize = rest
        .parse()
        .map_err(|_| NotationError::BadRow(rest.to_string()))?;

    let col = (col_char as u8 - b'A') as usize;
    if row == 0 || row > size || col >= size {
        return Err(NotationError::OutOfRange { text, size });
    }
    Ok(Coord::new(row - 1, col))
}
