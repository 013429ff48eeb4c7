//! Error types for analysis passes.
//!
//! None of these are user-facing findings. A conversion whose operand type
//! did not resolve is not an error at all; it is simply not boxing.

use thiserror::Error;

use crate::Span;

/// Errors that abort an analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The host invoked a conversion callback with another kind of operation.
    ///
    /// This is a defect in the host, not in the analyzed code.
    #[error("host contract violation: expected a Conversion operation at {span}, got {kind}")]
    NotAConversion { kind: &'static str, span: Span },

    /// The host cancelled the pass.
    #[error("analysis cancelled")]
    Cancelled,
}

impl AnalysisError {
    /// Whether this error signals a broken host rather than cancellation.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, AnalysisError::Cancelled)
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
