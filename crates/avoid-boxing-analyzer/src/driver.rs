//! In-process driver.
//!
//! Plays the host's scheduler for embedders and tests: visits every
//! conversion in every tree, then offers the redundant-cast diagnostics of
//! the pass to the suppressor.

use avoid_boxing_core::{
    AnalysisResult, CancellationFlag, Compilation, Diagnostic, Operation, SemanticModel,
    Suppression, TreeId,
};
use rayon::prelude::*;
use tracing::{debug, error};

use crate::config::AnalyzerConfig;
use crate::context::{OperationContext, SuppressionContext};
use crate::detector::AvoidImplicitBoxingAnalyzer;
use crate::suppressor::{AvoidImplicitBoxingSuppressor, SUPPRESSION};

/// Everything one pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOutput {
    /// Boxing diagnostics, ordered by location.
    pub diagnostics: Vec<Diagnostic>,
    pub suppressions: Vec<Suppression>,
}

impl AnalysisOutput {
    /// Whether `diagnostic` was suppressed in this pass.
    pub fn is_suppressed(&self, diagnostic: &Diagnostic) -> bool {
        self.suppressions.iter().any(|s| &s.diagnostic == diagnostic)
    }
}

/// Runs the detector and suppressor over a compilation.
#[derive(Debug, Clone)]
pub struct AnalysisDriver {
    analyzer: AvoidImplicitBoxingAnalyzer,
    suppressor: AvoidImplicitBoxingSuppressor,
    suppressor_enabled: bool,
    cancellation: CancellationFlag,
}

impl Default for AnalysisDriver {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl AnalysisDriver {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            analyzer: AvoidImplicitBoxingAnalyzer::new(config),
            suppressor: AvoidImplicitBoxingSuppressor,
            suppressor_enabled: config.is_enabled(SUPPRESSION.id, true),
            cancellation: CancellationFlag::new(),
        }
    }

    /// Share `flag` with the host so it can cancel the pass.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = flag;
        self
    }

    pub fn analyzer(&self) -> &AvoidImplicitBoxingAnalyzer {
        &self.analyzer
    }

    /// Run the boxing rule over every tree.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn analyze(&self, compilation: &dyn Compilation) -> AnalysisResult<Vec<Diagnostic>> {
        if !self.analyzer.is_enabled() {
            return Ok(Vec::new());
        }

        let trees = compilation.tree_ids();
        let per_tree: Vec<Vec<Diagnostic>> = if self.analyzer.registration().concurrent_execution {
            trees
                .par_iter()
                .map(|&tree| self.analyze_tree(compilation, tree))
                .collect::<AnalysisResult<_>>()?
        } else {
            trees
                .iter()
                .map(|&tree| self.analyze_tree(compilation, tree))
                .collect::<AnalysisResult<_>>()?
        };

        let mut diagnostics: Vec<_> = per_tree.into_iter().flatten().collect();
        diagnostics.sort_by_key(|d| d.location);
        Ok(diagnostics)
    }

    fn analyze_tree(
        &self,
        compilation: &dyn Compilation,
        tree: TreeId,
    ) -> AnalysisResult<Vec<Diagnostic>> {
        let Some(model) = compilation.semantic_model(tree) else {
            return Ok(Vec::new());
        };
        let registration = self.analyzer.registration();
        let generated = model.tree().is_generated();
        if !registration.visits(generated) {
            debug!(path = %model.tree().path, "skipping generated tree");
            return Ok(Vec::new());
        }

        let mut diagnostics = Vec::new();
        for conversion in conversions(model) {
            self.cancellation.check()?;
            if !registration.wants(conversion.dialect) {
                continue;
            }
            let mut ctx = OperationContext::new(conversion, model, &self.cancellation);
            self.analyzer
                .analyze_conversion(&mut ctx)
                .inspect_err(|err| {
                    if err.is_contract_violation() {
                        error!(path = %model.tree().path, %err, "conversion callback failed");
                    }
                })?;
            diagnostics.extend(ctx.into_diagnostics());
        }

        if !registration.reports(generated) {
            diagnostics.clear();
        }
        Ok(diagnostics)
    }

    /// Offer another rule's diagnostics to the suppressor.
    ///
    /// Only diagnostics with the suppressed rule's id are passed on.
    pub fn suppress(
        &self,
        compilation: &dyn Compilation,
        reported: &[Diagnostic],
    ) -> AnalysisResult<Vec<Suppression>> {
        if !self.suppressor_enabled {
            return Ok(Vec::new());
        }

        let candidates: Vec<Diagnostic> = reported
            .iter()
            .filter(|d| d.id == SUPPRESSION.suppressed_diagnostic_id)
            .cloned()
            .collect();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut ctx = SuppressionContext::new(&candidates, compilation, &self.cancellation);
        self.suppressor.report_suppressions(&mut ctx)?;
        Ok(ctx.into_suppressions())
    }

    /// Analyze, then suppress among `external` diagnostics from other rules.
    pub fn run(
        &self,
        compilation: &dyn Compilation,
        external: &[Diagnostic],
    ) -> AnalysisResult<AnalysisOutput> {
        let diagnostics = self.analyze(compilation)?;
        let suppressions = self.suppress(compilation, external)?;
        Ok(AnalysisOutput {
            diagnostics,
            suppressions,
        })
    }
}

/// Every conversion operation in the model, outermost first.
fn conversions(model: &dyn SemanticModel) -> Vec<&Operation> {
    let mut found = Vec::new();
    for root in model.operations() {
        root.walk(&mut |op| {
            if op.is_conversion() {
                found.push(op);
            }
        });
    }
    found
}
