//! Registration settings and per-callback contexts.
//!
//! A host decides when callbacks run. What it needs from a rule up front is
//! captured in [`Registration`]; what a callback sees while it runs is an
//! [`OperationContext`] or a [`SuppressionContext`].

use avoid_boxing_core::{
    CancellationFlag, Compilation, Diagnostic, Dialect, Operation, SemanticModel, Suppression,
    TreeId,
};
use bitflags::bitflags;

bitflags! {
    /// How a rule treats code the host marks as machine-generated.
    ///
    /// The empty set skips generated code entirely.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GeneratedCodeFlags: u8 {
        /// Run callbacks on generated code.
        const ANALYZE = 1 << 0;
        /// Keep diagnostics reported inside generated code.
        const REPORT_DIAGNOSTICS = 1 << 1;
    }
}

/// What a rule asks of the host when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Dialects whose conversions the rule wants to see.
    pub dialects: &'static [Dialect],
    pub generated_code: GeneratedCodeFlags,
    /// Callbacks may run in parallel for unrelated trees.
    pub concurrent_execution: bool,
}

impl Registration {
    /// Whether a tree with the given generated-ness should be visited at all.
    pub fn visits(&self, generated: bool) -> bool {
        !generated || self.generated_code.contains(GeneratedCodeFlags::ANALYZE)
    }

    /// Whether diagnostics found in such a tree are kept.
    pub fn reports(&self, generated: bool) -> bool {
        let keep = GeneratedCodeFlags::ANALYZE | GeneratedCodeFlags::REPORT_DIAGNOSTICS;
        !generated || self.generated_code.contains(keep)
    }

    pub fn wants(&self, dialect: Dialect) -> bool {
        self.dialects.contains(&dialect)
    }
}

/// Context for a single conversion callback.
pub struct OperationContext<'a> {
    operation: &'a Operation,
    model: &'a dyn SemanticModel,
    cancellation: &'a CancellationFlag,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> OperationContext<'a> {
    pub fn new(
        operation: &'a Operation,
        model: &'a dyn SemanticModel,
        cancellation: &'a CancellationFlag,
    ) -> Self {
        Self {
            operation,
            model,
            cancellation,
            diagnostics: Vec::new(),
        }
    }

    pub fn operation(&self) -> &'a Operation {
        self.operation
    }

    pub fn model(&self) -> &'a dyn SemanticModel {
        self.model
    }

    pub fn cancellation(&self) -> &'a CancellationFlag {
        self.cancellation
    }

    pub fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics reported during this callback.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Context for one suppression pass.
pub struct SuppressionContext<'a> {
    reported: &'a [Diagnostic],
    compilation: &'a dyn Compilation,
    cancellation: &'a CancellationFlag,
    suppressions: Vec<Suppression>,
}

impl<'a> SuppressionContext<'a> {
    pub fn new(
        reported: &'a [Diagnostic],
        compilation: &'a dyn Compilation,
        cancellation: &'a CancellationFlag,
    ) -> Self {
        Self {
            reported,
            compilation,
            cancellation,
            suppressions: Vec::new(),
        }
    }

    /// Diagnostics from the suppressed rule that are candidates this pass.
    pub fn reported_diagnostics(&self) -> &'a [Diagnostic] {
        self.reported
    }

    pub fn semantic_model(&self, tree: TreeId) -> Option<&'a dyn SemanticModel> {
        self.compilation.semantic_model(tree)
    }

    pub fn cancellation(&self) -> &'a CancellationFlag {
        self.cancellation
    }

    pub fn report_suppression(&mut self, suppression: Suppression) {
        self.suppressions.push(suppression);
    }

    pub fn into_suppressions(self) -> Vec<Suppression> {
        self.suppressions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(flags: GeneratedCodeFlags) -> Registration {
        Registration {
            dialects: &Dialect::ALL,
            generated_code: flags,
            concurrent_execution: true,
        }
    }

    #[test]
    fn skip_generated_by_default() {
        let reg = registration(GeneratedCodeFlags::default());
        assert!(reg.visits(false));
        assert!(reg.reports(false));
        assert!(!reg.visits(true));
        assert!(!reg.reports(true));
    }

    #[test]
    fn analyze_without_reporting() {
        let reg = registration(GeneratedCodeFlags::ANALYZE);
        assert!(reg.visits(true));
        assert!(!reg.reports(true));
    }

    #[test]
    fn analyze_and_report() {
        let reg = registration(GeneratedCodeFlags::all());
        assert!(reg.visits(true));
        assert!(reg.reports(true));
    }

    #[test]
    fn dialect_filter() {
        let reg = Registration {
            dialects: &[Dialect::VisualBasic],
            generated_code: GeneratedCodeFlags::empty(),
            concurrent_execution: false,
        };
        assert!(reg.wants(Dialect::VisualBasic));
        assert!(!reg.wants(Dialect::CSharp));
    }
}
