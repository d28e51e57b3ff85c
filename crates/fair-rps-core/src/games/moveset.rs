//! Validated, ordered list of move names.

use crate::error::MoveSetError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered move names: odd count, at least 3, unique, non-empty
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Smallest playable move set
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < Self::MIN_MOVES {
            return Err(MoveSetError::TooFew(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(MoveSetError::EmptyName(i + 1));
            }
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Zero-based position of a move name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Move name at a zero-based position
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Move name for a 1-based menu choice
    pub fn by_choice(&self, choice: usize) -> Option<&str> {
        choice.checked_sub(1).and_then(|i| self.name(i))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = MoveSetError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.names
    }
}
