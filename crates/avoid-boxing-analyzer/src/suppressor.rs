//! Keeps "remove redundant cast" suggestions away from boxing casts.
//!
//! The host's redundant-cast rule (`IDE0004`) flags `(object)1` because the
//! conversion would happen anyway. Removing that cast turns an explicit box
//! into an implicit one, which [`crate::detector`] then reports. This
//! suppressor hides `IDE0004` wherever the cast it points at is a boxing
//! conversion.

use avoid_boxing_core::{
    AnalysisResult, Diagnostic, SemanticModel, Suppression, SuppressionDescriptor,
};
use tracing::{debug, trace};

use crate::classifier::is_boxing_conversion;
use crate::context::SuppressionContext;

/// Id of this suppression.
pub const SUPPRESSION_ID: &str = "SPR0004";

/// Published id of the host's redundant-cast rule.
pub const REDUNDANT_CAST_ID: &str = "IDE0004";

pub const SUPPRESSION: SuppressionDescriptor = SuppressionDescriptor {
    id: SUPPRESSION_ID,
    suppressed_diagnostic_id: REDUNDANT_CAST_ID,
    justification: "Removing the cast would introduce an implicit boxing conversion",
};

/// Suppresses redundant-cast diagnostics on boxing casts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidImplicitBoxingSuppressor;

impl AvoidImplicitBoxingSuppressor {
    pub fn supported_suppressions(&self) -> &'static [SuppressionDescriptor] {
        &[SUPPRESSION]
    }

    /// Suppression callback.
    ///
    /// Each diagnostic is judged on its own; one that cannot be mapped back to
    /// a cast is skipped and the rest of the batch is still examined. Stops
    /// with `Cancelled` if the host cancels mid-batch.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn report_suppressions(&self, ctx: &mut SuppressionContext<'_>) -> AnalysisResult<()> {
        for diagnostic in ctx.reported_diagnostics() {
            if let Err(err) = ctx.cancellation().check() {
                debug!("suppression pass cancelled");
                return Err(err);
            }

            let Some(tree) = diagnostic.location.tree else {
                trace!(id = %diagnostic.id, "diagnostic has no source tree");
                continue;
            };
            let Some(model) = ctx.semantic_model(tree) else {
                trace!(id = %diagnostic.id, %tree, "tree not in compilation");
                continue;
            };

            if removing_cast_would_box(model, diagnostic) {
                debug!(location = %diagnostic.location, "suppressing {}", diagnostic.id);
                ctx.report_suppression(Suppression::new(&SUPPRESSION, diagnostic));
            }
        }
        Ok(())
    }
}

/// Whether the diagnostic sits on a user-written cast whose conversion boxes.
///
/// The cast is explicit, so its conversion is not flagged implicit. What
/// matters is whether the same conversion would box once the cast is gone.
fn removing_cast_would_box(model: &dyn SemanticModel, diagnostic: &Diagnostic) -> bool {
    let Some(node) = model.tree().find_node(diagnostic.location.span) else {
        trace!(location = %diagnostic.location, "no syntax at diagnostic span");
        return false;
    };
    if !node.is_explicit_cast() {
        trace!(raw_kind = node.raw_kind, dialect = %node.dialect, "not a cast shape");
        return false;
    }
    match model.operation_for_syntax(node) {
        Some(operation) => is_boxing_conversion(operation),
        None => {
            trace!(location = %diagnostic.location, "cast has no bound operation");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avoid_boxing_core::{
        AnalysisError, CancellationFlag, ConversionKind, Dialect, Location, MemoryCompilation,
        Operation, OperationKind, Severity, Span, SyntaxKind, TreeId, TypeDescriptor,
    };

    /// `object o = (object)1;` with the cast at 6:20.
    fn boxing_cast(compilation: &mut MemoryCompilation, from: TypeDescriptor) -> TreeId {
        cast_at(compilation, from, Span::new(6, 20, 9), Span::new(6, 28, 1))
    }

    fn cast_at(
        compilation: &mut MemoryCompilation,
        from: TypeDescriptor,
        cast_span: Span,
        lit_span: Span,
    ) -> TreeId {
        let model = compilation.add_tree("Test0.cs", Dialect::CSharp);
        let cast = model.add_syntax(SyntaxKind::CastExpression, cast_span, None);
        let lit = model.add_syntax(SyntaxKind::Literal, lit_span, Some(cast));

        let classification = if from.is_value_type() {
            ConversionKind::Boxing
        } else {
            ConversionKind::ImplicitReference
        };
        let operand = Operation::leaf(
            OperationKind::Literal,
            Some(from),
            lit,
            lit_span,
            Dialect::CSharp,
        );
        model.add_operation(Operation::conversion(
            operand,
            TypeDescriptor::reference("System.Object"),
            Some(classification),
            false,
            cast,
            cast_span,
        ));
        model.tree().id
    }

    fn redundant_cast(location: Location) -> Diagnostic {
        Diagnostic::new(
            REDUNDANT_CAST_ID,
            Severity::Hidden,
            "Cast is redundant",
            location,
            Vec::new(),
        )
    }

    fn suppress(
        compilation: &MemoryCompilation,
        reported: &[Diagnostic],
    ) -> AnalysisResult<Vec<Suppression>> {
        let cancel = CancellationFlag::new();
        let mut ctx = SuppressionContext::new(reported, compilation, &cancel);
        AvoidImplicitBoxingSuppressor.report_suppressions(&mut ctx)?;
        Ok(ctx.into_suppressions())
    }

    #[test]
    fn suppresses_boxing_cast() {
        let mut compilation = MemoryCompilation::new();
        let tree = boxing_cast(&mut compilation, TypeDescriptor::value("System.Int32"));
        let diag = redundant_cast(Location::in_tree(tree, Span::new(6, 20, 9)));

        let suppressions = suppress(&compilation, std::slice::from_ref(&diag)).unwrap();
        assert_eq!(suppressions.len(), 1);
        assert_eq!(suppressions[0].descriptor, SUPPRESSION);
        assert_eq!(suppressions[0].diagnostic, diag);
    }

    #[test]
    fn suppresses_cast_split_across_lines() {
        // object o = (object)
        //     1;
        let cast_span = Span::between(6, 20, 7, 14);
        let lit_span = Span::new(7, 13, 1);
        let mut compilation = MemoryCompilation::new();
        let int = TypeDescriptor::value("System.Int32");
        let tree = cast_at(&mut compilation, int, cast_span, lit_span);
        let diag = redundant_cast(Location::in_tree(tree, cast_span));

        let suppressions = suppress(&compilation, std::slice::from_ref(&diag)).unwrap();
        assert_eq!(suppressions.len(), 1);
        assert_eq!(suppressions[0].diagnostic, diag);
    }

    #[test]
    fn keeps_reference_cast() {
        let mut compilation = MemoryCompilation::new();
        let tree = boxing_cast(&mut compilation, TypeDescriptor::reference("System.String"));
        let diag = redundant_cast(Location::in_tree(tree, Span::new(6, 20, 9)));

        assert!(suppress(&compilation, &[diag]).unwrap().is_empty());
    }

    #[test]
    fn ignores_non_cast_shapes() {
        let mut compilation = MemoryCompilation::new();
        let tree = boxing_cast(&mut compilation, TypeDescriptor::value("System.Int32"));
        // Points at the literal inside the cast
        let diag = redundant_cast(Location::in_tree(tree, Span::new(6, 28, 1)));

        assert!(suppress(&compilation, &[diag]).unwrap().is_empty());
    }

    #[test]
    fn unmappable_diagnostic_does_not_stop_the_batch() {
        let mut compilation = MemoryCompilation::new();
        let tree = boxing_cast(&mut compilation, TypeDescriptor::value("System.Int32"));
        let reported = [
            redundant_cast(Location::none()),
            redundant_cast(Location::in_tree(TreeId(99), Span::new(1, 1, 1))),
            redundant_cast(Location::in_tree(tree, Span::new(6, 28, 1))),
            redundant_cast(Location::in_tree(tree, Span::new(6, 20, 9))),
        ];

        let suppressions = suppress(&compilation, &reported).unwrap();
        assert_eq!(suppressions.len(), 1);
        assert_eq!(suppressions[0].diagnostic, reported[3]);
    }

    #[test]
    fn honours_cancellation() {
        let mut compilation = MemoryCompilation::new();
        let tree = boxing_cast(&mut compilation, TypeDescriptor::value("System.Int32"));
        let reported = [redundant_cast(Location::in_tree(tree, Span::new(6, 20, 9)))];

        let cancel = CancellationFlag::new();
        cancel.cancel();
        let mut ctx = SuppressionContext::new(&reported, &compilation, &cancel);
        let err = AvoidImplicitBoxingSuppressor
            .report_suppressions(&mut ctx)
            .unwrap_err();
        assert_eq!(err, AnalysisError::Cancelled);
        assert!(ctx.into_suppressions().is_empty());
    }

    #[test]
    fn empty_batch() {
        let compilation = MemoryCompilation::new();
        assert!(suppress(&compilation, &[]).unwrap().is_empty());
    }

    #[test]
    fn descriptor_targets_redundant_cast_rule() {
        let supported = AvoidImplicitBoxingSuppressor.supported_suppressions();
        assert_eq!(supported.len(), 1);
        assert_eq!(supported[0].id, "SPR0004");
        assert_eq!(supported[0].suppressed_diagnostic_id, "IDE0004");
    }
}
