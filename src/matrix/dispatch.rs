use serde::Serialize;
use tracing::debug;

use super::{Matrix, ParseOutcome, parse_grid, parse_list};

/// A named way of reading pasted text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    List,
    Grid,
}

impl Strategy {
    /// Tried in this order; the first match wins.
    pub const PRIORITY: [Strategy; 2] = [Self::List, Self::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }

    /// A list paste that placed nothing is not applicable, so a grid gets its turn.
    pub fn parse(self, text: &str) -> ParseOutcome {
        match self {
            Self::List => {
                let matrix = parse_list(text);
                if matrix.has_entries() {
                    ParseOutcome::Matched(matrix)
                } else {
                    ParseOutcome::NotApplicable
                }
            }
            Self::Grid => parse_grid(text),
        }
    }
}

/// Runs `strategies` in order and returns the first match with its cells split
/// into one item per line.
pub fn dispatch_with(strategies: &[Strategy], text: &str) -> Option<(Strategy, Matrix)> {
    strategies.iter().find_map(|&strategy| {
        let outcome = strategy.parse(text);
        debug!(
            strategy = strategy.as_str(),
            matched = outcome.is_matched(),
            "tried paste strategy"
        );
        outcome.matched().map(|matrix| (strategy, matrix.split_items()))
    })
}

#[cfg(test)]
pub fn dispatch(text: &str) -> Option<(Strategy, Matrix)> {
    dispatch_with(&Strategy::PRIORITY, text)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PasteOutcome {
    Replaced { strategy: Strategy },
    Unchanged,
}

/// Holds the matrix currently on display. Each successful paste swaps in a
/// fresh matrix; nothing carries over from the previous one.
#[derive(Debug, Clone)]
pub struct Board {
    current: Matrix,
    strategies: Vec<Strategy>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_strategies(&Strategy::PRIORITY)
    }

    pub fn with_strategies(strategies: &[Strategy]) -> Self {
        Self {
            current: Matrix::empty(),
            strategies: strategies.to_vec(),
        }
    }

    pub fn current(&self) -> &Matrix {
        &self.current
    }

    pub fn paste(&mut self, text: &str) -> PasteOutcome {
        match dispatch_with(&self.strategies, text) {
            Some((strategy, matrix)) => {
                self.current = matrix;
                PasteOutcome::Replaced { strategy }
            }
            None => PasteOutcome::Unchanged,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
