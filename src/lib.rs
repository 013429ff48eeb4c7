//! Detects implicit boxing conversions and keeps redundant-cast fixes from
//! introducing new ones.
//!
//! The rules run over a semantic model built by a host compiler. Hosts
//! implement [`Compilation`] and [`SemanticModel`]; tests and embedders can
//! use the in-memory [`MemoryCompilation`] instead.

pub use avoid_boxing_analyzer as analyzer;
pub use avoid_boxing_core as model;

pub use avoid_boxing_analyzer::{
    AnalysisDriver, AnalysisOutput, AnalyzerConfig, AvoidImplicitBoxingAnalyzer,
    AvoidImplicitBoxingSuppressor, ConfigError, is_boxing_conversion, is_implicit_boxing_conversion,
};
pub use avoid_boxing_core::{
    AnalysisError, Compilation, Diagnostic, MemoryCompilation, SemanticModel, Suppression,
};

pub mod prelude {
    pub use avoid_boxing_analyzer::{
        AnalysisDriver, AnalysisOutput, AnalyzerConfig, AvoidImplicitBoxingAnalyzer,
        AvoidImplicitBoxingSuppressor, DIAGNOSTIC_ID, KNOWN_IDS, REDUNDANT_CAST_ID, RULE,
        SUPPRESSION, SUPPRESSION_ID, is_boxing_conversion, is_implicit_boxing_conversion,
    };
    pub use avoid_boxing_core::{
        AnalysisError, CancellationFlag, Compilation, ConversionKind, Diagnostic, Dialect, Location,
        MemoryCompilation, MemorySemanticModel, Operation, OperationKind, SemanticModel, Severity,
        Span, Suppression, SyntaxKind, TreeId, TypeDescriptor, TypeFlags,
    };
}
