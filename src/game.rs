//! The turn loop.
//!
//! X always moves first. Each seat is a [`Participant`]: a human typing move
//! numbers, the search engine, or a random mover. The loop prints the grid,
//! asks the participant to move, rejects bad input with a message and asks
//! again, and stops once somebody wins or the board fills up.
//!
//! Input and output are passed in, so a whole game can be scripted:
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_minimax::game::{Game, Participant};
//! use tictactoe_minimax::rules::Outcome;
//!
//! let mut game = Game::new(Participant::Human, Participant::Human).unwrap();
//! let mut input = Cursor::new("1\n4\n2\n5\n3\n");
//! let mut output = Vec::new();
//! let outcome = game.run(&mut input, &mut output).unwrap();
//! assert!(matches!(outcome, Outcome::Win(_)));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail, ensure};
use tracing::{debug, info};

use crate::board::{Board, Player};
use crate::moves::{Move, MoveError, parse_move, play_move};
use crate::playout::RandomMover;
use crate::rules::{Outcome, outcome};
use crate::search::best_move;

/// Who makes the moves for one side.
#[derive(Clone, Debug)]
pub enum Participant {
    /// Reads move numbers from the input
    Human,
    /// Minimax search; may only play O
    Computer,
    /// Uniformly random legal moves
    Random(RandomMover),
}

/// State of one game session.
pub struct Game {
    board: Board,
    current: Player,
    x: Participant,
    o: Participant,
}

impl Game {
    /// Start a game on an empty board with X to move.
    ///
    /// Fails if the search engine is seated as X, since it only plays O.
    pub fn new(x: Participant, o: Participant) -> Result<Self> {
        ensure!(
            !matches!(x, Participant::Computer),
            "the computer can only play O"
        );
        Ok(Self {
            board: Board::new(),
            current: Player::X,
            x,
            o,
        })
    }

    /// Play until the game ends and return how it ended.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Outcome> {
        write!(out, "{}", self.board)?;
        loop {
            if let Some(result) = self.turn(input, out)? {
                return Ok(result);
            }
        }
    }

    /// One attempt at a move for the current player.
    ///
    /// Returns the outcome if the accepted move ended the game. A rejected
    /// move leaves the turn with the same player.
    fn turn<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Option<Outcome>> {
        let player = self.current;
        let seat = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        let choice = match seat {
            Participant::Human => {
                writeln!(
                    out,
                    "Player {player}, enter your move using the numbers on the grid:\n"
                )?;
                out.flush()?;
                let line = read_token(input)?;
                parse_move(&line)
            }
            Participant::Computer => {
                let mv = best_move(&self.board).context("no empty cell left for the computer")?;
                writeln!(out, "Opponent chose move: {mv}")?;
                Ok(mv)
            }
            Participant::Random(mover) => {
                let mv = mover
                    .choose(&self.board)
                    .context("no empty cell left for the random player")?;
                writeln!(out, "Player {player} chose move: {mv}")?;
                Ok(mv)
            }
        };

        let mv = match choice {
            Ok(mv) => mv,
            Err(err) => {
                debug!(%player, %err, "move rejected");
                report(out, &err)?;
                return Ok(None);
            }
        };

        let finished = match self.apply(mv) {
            Ok(finished) => finished,
            Err(err) => {
                debug!(%player, %err, "move rejected");
                report(out, &err)?;
                return Ok(None);
            }
        };
        debug!(%player, %mv, "move accepted");

        write!(out, "{}", self.board)?;
        if let Some(result) = finished {
            info!(?result, marks = self.board.marks(), "game over");
            announce(out, result)?;
            out.flush()?;
        }
        Ok(finished)
    }

    /// Place the current player's mark for `mv` and pass the turn on.
    ///
    /// Returns the outcome if the move ended the game, in which case the
    /// turn stays with the player who moved.
    pub fn apply(&mut self, mv: Move) -> Result<Option<Outcome>, MoveError> {
        play_move(&mut self.board, mv, self.current)?;
        let result = outcome(&self.board);
        if result.is_none() {
            self.current = self.current.opponent();
        }
        Ok(result)
    }
}

/// Read the next non-blank line.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so they reach
/// the move parser as an invalid token.
fn read_token<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .context("failed to read a move from standard input")?;
        if n == 0 {
            bail!("standard input closed before the game finished");
        }
        let line = String::from_utf8_lossy(&buf);
        let token = line.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }
}

fn report<W: Write>(out: &mut W, err: &MoveError) -> Result<()> {
    match err {
        MoveError::Empty => {}
        MoveError::NotANumber(token) => {
            writeln!(out, "Invalid Move Number: {token}, Please try again")?
        }
        MoveError::OutOfRange(token) => {
            writeln!(out, "Invalid Move Number: {token}, Please try again")?
        }
        MoveError::Occupied(_) => writeln!(out, "Spot already taken, please try again.")?,
    }
    Ok(())
}

fn announce<W: Write>(out: &mut W, result: Outcome) -> Result<()> {
    match result {
        Outcome::Win(player) => writeln!(out, "Player {player} has won!")?,
        Outcome::Draw => writeln!(out, "Game ended in a draw")?,
    }
    Ok(())
}
