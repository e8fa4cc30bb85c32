//! Turn loop between two players

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::board::{Board, Coord, Side};
use crate::player::Player;

/// How a game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    Won(Side),
    /// The side to move produced no (legal) move
    Quit(Side),
}

impl GameEnd {
    pub fn winner(self) -> Option<Side> {
        match self {
            GameEnd::Won(side) => Some(side),
            GameEnd::Quit(_) => None,
        }
    }
}

/// One applied move
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MoveRecord {
    pub side: Side,
    pub coord: Coord,
    pub elapsed: Duration,
}

/// Full history of a finished game
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub end: GameEnd,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Side> {
        self.end.winner()
    }
}

/// Alternate turns, Red first, until someone connects or a player quits.
///
/// `on_move` sees the board right after each placement.
pub fn play_game(
    board: &mut Board,
    red: &mut dyn Player,
    blue: &mut dyn Player,
    mut on_move: impl FnMut(&Board, &MoveRecord),
) -> GameRecord {
    let mut moves = Vec::new();
    let mut side = Side::Red;

    let end = loop {
        let player: &mut dyn Player = match side {
            Side::Red => &mut *red,
            Side::Blue => &mut *blue,
        };
        debug_assert_eq!(player.side(), side, "{} seated on the wrong side", player.name());

        let start = Instant::now();
        let Some(coord) = player.decide_move(board) else {
            break GameEnd::Quit(side);
        };
        let elapsed = start.elapsed();

        if !board.place(coord.row, coord.col, side) {
            tracing::warn!(player = player.name(), ?coord, "illegal move, ending game");
            break GameEnd::Quit(side);
        }

        let record = MoveRecord { side, coord, elapsed };
        on_move(board, &record);
        moves.push(record);

        if board.check_win(side) {
            break GameEnd::Won(side);
        }
        side = side.opponent();
    };

    tracing::debug!(?end, moves = moves.len(), "game over");
    GameRecord { end, moves }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::player::AiPlayer;

    /// Plays a fixed list of moves, then quits
    struct Scripted {
        side: Side,
        moves: Vec<Coord>,
    }

    impl Player for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn side(&self) -> Side {
            self.side
        }

        fn decide_move(&mut self, _board: &Board) -> Option<Coord> {
            if self.moves.is_empty() {
                None
            } else {
                Some(self.moves.remove(0))
            }
        }
    }

    #[test]
    fn test_scripted_red_win() {
        let mut board = Board::new(3);
        let mut red = Scripted {
            side: Side::Red,
            moves: vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
        };
        let mut blue = Scripted {
            side: Side::Blue,
            moves: vec![Coord::new(0, 2), Coord::new(1, 2)],
        };
        let mut seen = 0;
        let record = play_game(&mut board, &mut red, &mut blue, |_, _| seen += 1);
        assert_eq!(record.end, GameEnd::Won(Side::Red));
        assert_eq!(record.moves.len(), 5);
        assert_eq!(seen, 5);
        assert_eq!(record.moves[1].side, Side::Blue);
    }

    #[test]
    fn test_quit_and_illegal_move() {
        let mut board = Board::new(3);
        let mut red = Scripted { side: Side::Red, moves: vec![] };
        let mut blue = Scripted { side: Side::Blue, moves: vec![] };
        let record = play_game(&mut board, &mut red, &mut blue, |_, _| {});
        assert_eq!(record.end, GameEnd::Quit(Side::Red));
        assert!(record.winner().is_none());

        let mut board = Board::new(3);
        let mut red = Scripted { side: Side::Red, moves: vec![Coord::new(1, 1)] };
        let mut blue = Scripted { side: Side::Blue, moves: vec![Coord::new(1, 1)] };
        let record = play_game(&mut board, &mut red, &mut blue, |_, _| {});
        assert_eq!(record.end, GameEnd::Quit(Side::Blue));
        assert_eq!(record.moves.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "wrong side")]
    fn test_players_in_swapped_seats() {
        let mut board = Board::new(3);
        let mut red = Scripted { side: Side::Red, moves: vec![Coord::new(0, 0)] };
        let mut blue = Scripted { side: Side::Blue, moves: vec![Coord::new(2, 2)] };
        play_game(&mut board, &mut blue, &mut red, |_, _| {});
    }

    #[test]
    fn test_ai_game_finishes_with_winner() {
        let mut board = Board::new(4);
        let mut red = AiPlayer::from_difficulty(Side::Red, Difficulty::Medium);
        let mut blue = AiPlayer::from_difficulty(Side::Blue, Difficulty::Easy);
        let record = play_game(&mut board, &mut red, &mut blue, |_, _| {});
        let winner = record.winner().expect("AI games always finish");
        assert!(board.check_win(winner));
        assert!(!board.check_win(winner.opponent()));
    }
}
