//! Implicit boxing analyzer.
//!
//! Two rules over the host's operation tree, sharing one classifier:
//!
//! - **Detection** ([`AvoidImplicitBoxingAnalyzer`]): reports every
//!   conversion the compiler inserted that boxes a value type.
//! - **Suppression** ([`AvoidImplicitBoxingSuppressor`]): hides the host's
//!   "redundant cast" diagnostic on casts that box, since removing them would
//!   only trade an explicit box for an implicit one.
//!
//! ## Modules
//!
//! - [`classifier`]: Boxing / implicit boxing predicates
//! - [`context`]: Registration settings and callback contexts
//! - [`config`]: TOML configuration and per-rule overrides
//! - [`detector`]: The `AvoidImplicitBoxing` rule
//! - [`suppressor`]: The `SPR0004` suppression of `IDE0004`
//! - [`driver`]: In-process driver running both over a compilation

pub mod classifier;
pub mod config;
pub mod context;
pub mod detector;
pub mod driver;
pub mod suppressor;

pub use classifier::{is_boxing_conversion, is_implicit_boxing_conversion};
pub use config::{AnalyzerConfig, ConfigError, ConfiguredSeverity, GeneratedCode, RuleConfig};
pub use context::{GeneratedCodeFlags, OperationContext, Registration, SuppressionContext};
pub use detector::{AvoidImplicitBoxingAnalyzer, DIAGNOSTIC_ID, RULE};
pub use driver::{AnalysisDriver, AnalysisOutput};
pub use suppressor::{AvoidImplicitBoxingSuppressor, REDUNDANT_CAST_ID, SUPPRESSION, SUPPRESSION_ID};

/// Every id that may appear under `[rules]` in configuration.
pub const KNOWN_IDS: &[&str] = &[DIAGNOSTIC_ID, SUPPRESSION_ID];
