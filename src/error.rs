//! Error types for ranking runs.

use thiserror::Error;

use crate::rank::RankMap;

pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Debug, Error)]
pub enum RankError {
    /// Bad input: empty graph, out-of-range tunable, unknown page, zero-sum map.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The solver hit its sweep cap. `ranks` holds the normalized best-effort result.
    #[error("No convergence after {sweeps} sweeps (max change {max_change:.6})")]
    NonConvergence {
        sweeps: usize,
        max_change: f64,
        ranks: RankMap,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl RankError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RankError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn non_convergence(sweeps: usize, max_change: f64, ranks: RankMap) -> Self {
        RankError::NonConvergence {
            sweeps,
            max_change,
            ranks,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RankError::InvalidArgument { .. })
    }

    /// Best-effort ranks salvaged from a run that did not converge.
    /// Any other error is handed back unchanged.
    pub fn into_best_effort(self) -> Result<RankMap> {
        match self {
            RankError::NonConvergence { ranks, .. } => Ok(ranks),
            other => Err(other),
        }
    }
}

/// Damping must lie strictly between 0 and 1.
pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::invalid_argument(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}
