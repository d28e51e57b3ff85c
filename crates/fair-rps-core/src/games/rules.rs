//! Cyclic win/lose relation over an odd number of moves.
//!
//! Moves sit on a circle in the order they were given. With
//! `middle = N / 2`, the move at index `i` beats the `middle` moves that follow
//! it (offsets `+1..=+middle`, wrapping) and loses to the `middle` moves that
//! precede it. Since N is odd, every other move lands in exactly one of the
//! two halves, so the relation is a tournament.

use super::MoveSet;
use crate::error::{GameError, MoveSetError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing move A against move B
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    AWins,
    BWins,
    Draw,
}

impl Outcome {
    /// The same comparison seen from the other side
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::AWins => Outcome::BWins,
            Outcome::BWins => Outcome::AWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Label from A's point of view, as shown in the help table
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::AWins => "Win",
            Outcome::BWins => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Win/lose relation derived from a [`MoveSet`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    moves: MoveSet,
}

impl RuleSet {
    /// Validate the move names and derive the rules
    pub fn build<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_move_set(MoveSet::new(names)?))
    }

    /// Derive the rules for an already validated move set
    pub fn from_move_set(moves: MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Number of moves each move beats (and loses to)
    pub fn middle(&self) -> usize {
        self.moves.len() / 2
    }

    /// Does the move at index `a` beat the move at index `b`?
    ///
    /// Out-of-range indices never beat anything.
    pub fn beats_index(&self, a: usize, b: usize) -> bool {
        let n = self.moves.len();
        if a >= n || b >= n {
            return false;
        }
        let offset = (b + n - a) % n;
        (1..=self.middle()).contains(&offset)
    }

    /// Compare the moves at indices `a` and `b`
    pub fn compare_index(&self, a: usize, b: usize) -> Outcome {
        if a == b {
            Outcome::Draw
        } else if self.beats_index(a, b) {
            Outcome::AWins
        } else {
            Outcome::BWins
        }
    }

    /// Does move `a` beat move `b`?
    pub fn beats(&self, a: &str, b: &str) -> Result<bool, GameError> {
        Ok(self.beats_index(self.index(a)?, self.index(b)?))
    }

    /// Compare move `a` against move `b`
    pub fn compare(&self, a: &str, b: &str) -> Result<Outcome, GameError> {
        Ok(self.compare_index(self.index(a)?, self.index(b)?))
    }

    /// Moves that `name` beats, nearest first
    pub fn winning_moves(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.index(name)?;
        let n = self.moves.len();
        Ok((1..=self.middle())
            .filter_map(|offset| self.moves.name((i + offset) % n))
            .collect())
    }

    /// Moves that beat `name`, nearest first
    pub fn losing_moves(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.index(name)?;
        let n = self.moves.len();
        Ok((1..=self.middle())
            .filter_map(|offset| self.moves.name((i + n - offset) % n))
            .collect())
    }

    /// Full outcome table, rows against columns
    pub fn outcome_table(&self) -> OutcomeTable<'_> {
        OutcomeTable { rules: self }
    }

    fn index(&self, name: &str) -> Result<usize, GameError> {
        self.moves
            .index_of(name)
            .ok_or_else(|| GameError::InvalidMove(name.to_string()))
    }
}

/// Help-screen view of a [`RuleSet`]: each cell is the row move's outcome
/// against the column move
pub struct OutcomeTable<'r> {
    rules: &'r RuleSet,
}

impl OutcomeTable<'_> {
    /// Outcome of row `row` against column `col`
    pub fn cell(&self, row: usize, col: usize) -> Outcome {
        self.rules.compare_index(row, col)
    }

    /// Rows of outcomes in move order
    pub fn rows(&self) -> Vec<Vec<Outcome>> {
        let n = self.rules.moves.len();
        (0..n)
            .map(|row| (0..n).map(|col| self.cell(row, col)).collect())
            .collect()
    }
}

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves = self.rules.moves();
        let corner = "you \\ pc";
        let width = moves
            .iter()
            .map(str::len)
            .chain([corner.len(), "Draw".len()])
            .max()
            .unwrap_or(0);

        write!(f, "{:<width$}", corner, width = width)?;
        for name in moves.iter() {
            write!(f, " | {:<width$}", name, width = width)?;
        }
        writeln!(f)?;

        let columns = moves.len() + 1;
        writeln!(f, "{}", vec!["-".repeat(width); columns].join("-+-"))?;

        for (row, outcomes) in self.rows().iter().enumerate() {
            write!(f, "{:<width$}", moves.name(row).unwrap_or_default(), width = width)?;
            for outcome in outcomes {
                write!(f, " | {:<width$}", outcome.as_str(), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
