//! Error taxonomy for coverage planning

use crate::core::Method;
use thiserror::Error;

/// Result type for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Errors reported to the caller of a sweep.
///
/// Degenerate geometry is not an error: it is resolved per sample by the
/// error models and only ever excludes that sample from the region.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    /// A numeric parameter is outside its valid domain
    #[error("invalid parameter `{parameter}` = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Error parameters belong to a different method than the one requested
    #[error("error parameters for {provided} supplied to a {requested} computation")]
    MethodMismatch { requested: Method, provided: Method },

    /// Several parameters failed validation at once
    #[error("{}", describe_multiple(.0))]
    Multiple(Vec<PlanningError>),

    /// Sweep was cancelled through its token
    #[error("sweep cancelled after {completed_rays} of {total_rays} rays")]
    Cancelled {
        completed_rays: usize,
        total_rays: usize,
    },

    /// Background worker thread terminated without producing a result
    #[error("sweep worker failed: {0}")]
    WorkerFailed(String),
}

fn describe_multiple(errors: &[PlanningError]) -> String {
    match errors.first() {
        Some(first) => format!("{} invalid parameters, first: {}", errors.len(), first),
        None => "no invalid parameters reported".to_string(),
    }
}

impl PlanningError {
    pub fn invalid(parameter: &str, value: impl ToString, reason: &str) -> Self {
        PlanningError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the run
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            PlanningError::InvalidParameter { .. }
                | PlanningError::MethodMismatch { .. }
                | PlanningError::Multiple(_)
        )
    }
}
