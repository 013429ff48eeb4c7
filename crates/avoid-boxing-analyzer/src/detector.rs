//! The implicit boxing rule.
//!
//! Runs once per conversion operation the host visits and reports a warning
//! for each one the compiler inserted that boxes a value type.

use std::borrow::Cow;

use avoid_boxing_core::{
    AnalysisError, AnalysisResult, Diagnostic, DiagnosticDescriptor, Dialect, Location, Severity,
};
use tracing::debug;

use crate::classifier::is_implicit_boxing_conversion;
use crate::config::AnalyzerConfig;
use crate::context::{GeneratedCodeFlags, OperationContext, Registration};

/// Published id of the rule.
pub const DIAGNOSTIC_ID: &str = "AvoidImplicitBoxing";

/// Descriptor for the implicit boxing rule.
pub const RULE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: DIAGNOSTIC_ID,
    title: "Avoid implicit boxing",
    message_format: "{0} implicitly boxed to {1}",
    category: "Conversions",
    default_severity: Severity::Warning,
    enabled_by_default: true,
    description: "A value type is converted to a reference type without a cast. \
                  Each such conversion allocates a box on the heap.",
};

/// Detects implicit boxing conversions.
#[derive(Debug, Clone)]
pub struct AvoidImplicitBoxingAnalyzer {
    enabled: bool,
    severity: Severity,
    message_format: Cow<'static, str>,
    registration: Registration,
}

impl Default for AvoidImplicitBoxingAnalyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl AvoidImplicitBoxingAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        let rule = config.rule(&RULE);
        Self {
            enabled: rule.enabled,
            severity: rule.severity,
            message_format: rule.message_format,
            registration: Registration {
                dialects: &Dialect::ALL,
                generated_code: config.generated_code.flags(),
                concurrent_execution: config.concurrent,
            },
        }
    }

    pub fn supported_diagnostics(&self) -> &'static [DiagnosticDescriptor] {
        &[RULE]
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn generated_code(&self) -> GeneratedCodeFlags {
        self.registration.generated_code
    }

    /// Conversion callback.
    ///
    /// Fails only when the host invokes it with an operation that is not a
    /// conversion. A disabled rule reports nothing.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn analyze_conversion(&self, ctx: &mut OperationContext<'_>) -> AnalysisResult<()> {
        let operation = ctx.operation();
        debug_assert!(
            operation.is_conversion(),
            "conversion callback invoked with {}",
            operation.kind
        );
        if !operation.is_conversion() {
            return Err(AnalysisError::NotAConversion {
                kind: operation.kind.name(),
                span: operation.span,
            });
        }

        if !self.enabled || !is_implicit_boxing_conversion(Some(operation)) {
            return Ok(());
        }
        let (Some(source), Some(destination)) = (operation.operand_type(), &operation.ty) else {
            return Ok(());
        };

        let model = ctx.model();
        let position = operation.span.start();
        let arguments = vec![
            model.minimal_display_name(source, position),
            model.minimal_display_name(destination, position),
        ];

        let diagnostic = Diagnostic::new(
            DIAGNOSTIC_ID,
            self.severity,
            &self.message_format,
            Location::in_tree(model.tree().id, operation.span),
            arguments,
        );
        debug!(
            location = %diagnostic.location,
            message = %diagnostic.message,
            "implicit boxing conversion"
        );
        ctx.report_diagnostic(diagnostic);
        Ok(())
    }
}
