//! Human player reading moves from a terminal

use std::io::{self, BufRead, Write};

use hexai_core::{format_move, parse_move, Board, Coord, Player, Side};

/// Prompts on `output` and reads moves from `input` until one is legal
pub struct HumanPlayer<R, W> {
    side: Side,
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(side: Side) -> Self {
        Self::new(side, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(side: Side, input: R, output: W) -> Self {
        Self {
            side,
            name: format!("Human ({})", side),
            input,
            output,
        }
    }

    /// Next trimmed input line, `None` on EOF or read failure
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, text: &str) {
        // a closed terminal surfaces as EOF on the next read
        let _ = writeln!(self.output, "{}", text);
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        self.side
    }

    fn decide_move(&mut self, board: &Board) -> Option<Coord> {
        loop {
            let prompt = format!("\n{}, enter move (e.g. A1) or 'quit': ", self.name);
            let _ = write!(self.output, "{}", prompt);
            let _ = self.output.flush();

            let text = self.read_line()?;
            if text.eq_ignore_ascii_case("quit") {
                return None;
            }

            let mv = match parse_move(&text, board.size()) {
                Ok(mv) => mv,
                Err(e) => {
                    let size = board.size();
                    self.say(&format!(
                        "  Invalid input ({}). Use a column letter and row number, 1-{}.",
                        e, size
                    ));
                    continue;
                }
            };

            if !board.is_empty_at(mv) {
                self.say(&format!("  Cell {} is already occupied. Try again.", format_move(mv)));
                continue;
            }

            return Some(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(script: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Side::Red, Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_valid_move() {
        let board = Board::new(5);
        let mut player = human("b3\n");
        assert_eq!(player.decide_move(&board), Some(Coord::new(2, 1)));
    }

    #[test]
    fn test_retries_invalid_and_occupied() {
        let mut board = Board::new(5);
        board.place(0, 0, Side::Blue);
        let mut player = human("zz\nA1\nF1\nA2\n");
        assert_eq!(player.decide_move(&board), Some(Coord::new(1, 0)));

        let transcript = String::from_utf8(player.output.clone()).unwrap();
        assert_eq!(transcript.matches("Invalid input").count(), 2);
        assert!(transcript.contains("Cell A1 is already occupied"));
    }

    #[test]
    fn test_quit_and_eof() {
        let board = Board::new(5);
        assert_eq!(human("QUIT\n").decide_move(&board), None);
        assert_eq!(human("").decide_move(&board), None);
        assert_eq!(human("x\n").decide_move(&board), None);
    }

    #[test]
    fn test_name() {
        let player = human("");
        assert_eq!(player.name(), "Human (Red)");
        assert_eq!(player.side(), Side::Red);
    }
}
