//! Strict-equality execution
//!
//! Stands in for the external equivalence check that accepts a result only
//! when independent executions of the same computation agree exactly. The
//! computation runs `rounds` times; each result is serialized with serde_json
//! and the byte sequences must match round 0.

use crate::error::{OracleError, Result};
use serde::Serialize;
use std::future::Future;
use tracing::{debug, warn};

/// Default number of executions compared per computation
pub const DEFAULT_ROUNDS: usize = 3;

/// Runs a computation repeatedly and demands byte-identical results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictEquality {
    rounds: usize,
}

impl StrictEquality {
    /// Create a runner comparing `rounds` executions
    ///
    /// Fails when `rounds` is zero.
    pub fn new(rounds: usize) -> Result<Self> {
        if rounds == 0 {
            return Err(OracleError::InvalidArgument(
                "strict equality needs at least one round".to_string(),
            ));
        }
        Ok(Self { rounds })
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Execute `computation` once per round and return the agreed result
    pub fn run<T, F>(&self, mut computation: F) -> Result<T>
    where
        T: Serialize,
        F: FnMut() -> Result<T>,
    {
        let first = computation()?;
        let expected = serde_json::to_vec(&first)?;

        for round in 1..self.rounds {
            let candidate = serde_json::to_vec(&computation()?)?;
            if candidate != expected {
                warn!("Round {} disagreed with round 0", round);
                return Err(OracleError::Disagreement { round });
            }
        }

        debug!("{} round(s) agreed on {} bytes", self.rounds, expected.len());
        Ok(first)
    }

    /// Async variant of [`StrictEquality::run`]
    ///
    /// Rounds run one after another; all of them complete before the
    /// results are compared.
    pub async fn run_async<T, F, Fut>(&self, mut computation: F) -> Result<T>
    where
        T: Serialize,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut results = Vec::with_capacity(self.rounds);
        for _ in 0..self.rounds {
            results.push(computation().await?);
        }

        let mut results = results.into_iter();
        self.run(move || {
            results
                .next()
                .ok_or_else(|| OracleError::Other("round results exhausted".to_string()))
        })
    }
}

impl Default for StrictEquality {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}
