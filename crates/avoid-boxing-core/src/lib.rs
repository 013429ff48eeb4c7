//! Semantic model for the implicit-boxing analyzer.
//!
//! Everything here is a read-only view over what a host compiler has already
//! built: syntax trees, the operation tree with its conversion
//! classifications, and resolved types. The analyzer consumes these through
//! the [`SemanticModel`] and [`Compilation`] traits.
//!
//! ## Modules
//!
//! - [`span`]: Source spans and diagnostic locations
//! - [`type_hash`]: Hashed type identity
//! - [`types`]: Resolved type descriptors and their value/reference flags
//! - [`syntax`]: Syntax trees, node kinds, generated-code detection
//! - [`operation`]: Operation tree and conversion classification
//! - [`semantic`]: Provider traits implemented by hosts
//! - [`diagnostic`]: Diagnostic and suppression records
//! - [`memory`]: In-memory compilation for tests and embedding

pub mod cancellation;
pub mod diagnostic;
pub mod dialect;
pub mod error;
pub mod memory;
pub mod operation;
pub mod semantic;
pub mod span;
pub mod syntax;
pub mod type_hash;
pub mod types;

pub use cancellation::CancellationFlag;
pub use diagnostic::{
    Diagnostic, DiagnosticDescriptor, Severity, Suppression, SuppressionDescriptor, format_message,
};
pub use dialect::Dialect;
pub use error::{AnalysisError, AnalysisResult};
pub use memory::{KeywordAliases, MemoryCompilation, MemorySemanticModel};
pub use operation::{ConversionKind, ConversionOperation, Operation, OperationKind};
pub use semantic::{Compilation, SemanticModel};
pub use span::{Location, Span};
pub use syntax::{SyntaxId, SyntaxKind, SyntaxNode, SyntaxTree, TreeId, is_generated_path};
pub use type_hash::TypeHash;
pub use types::{TypeDescriptor, TypeFlags};
