//! A plan is the sequence of blank moves that turns the initial board into
//! the goal. This module provides the [`Plan`] struct and its text format: one
//! direction per line, with everything after a `;` treated as a comment.

use crate::search::Direction;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plan {
    steps: Vec<Direction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The plan in its file format, followed by a cost comment.
    pub fn to_file_contents(&self) -> String {
        if self.is_empty() {
            "; cost = 0 (unit cost)\n".to_string()
        } else {
            format!("{}\n; cost = {} (unit cost)\n", self, self.len())
        }
    }
}

impl FromStr for Plan {
    type Err = PlanError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut steps = vec![];
        for (index, line) in text.lines().enumerate() {
            let step = line.split(';').next().unwrap_or_default().trim();
            if step.is_empty() {
                continue;
            }
            let direction = step.parse::<Direction>().map_err(|message| PlanError::Parse {
                line: index + 1,
                message,
            })?;
            steps.push(direction);
        }
        Ok(Self { steps })
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl IntoIterator for Plan {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
