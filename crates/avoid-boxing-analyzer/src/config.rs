//! Analyzer configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! generated_code = "skip"   # skip | analyze | report
//! concurrent = true
//!
//! [rules.AvoidImplicitBoxing]
//! severity = "error"
//! message = "boxing {0} as {1}"
//!
//! [rules.SPR0004]
//! enabled = false
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use avoid_boxing_core::{DiagnosticDescriptor, Severity};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::context::GeneratedCodeFlags;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown rule id '{0}'")]
    UnknownRule(String),
}

/// Treatment of machine-generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedCode {
    /// Do not look at generated code.
    #[default]
    Skip,
    /// Run on generated code but drop what is found there.
    Analyze,
    /// Run on generated code and report findings.
    Report,
}

impl GeneratedCode {
    pub fn flags(self) -> GeneratedCodeFlags {
        match self {
            GeneratedCode::Skip => GeneratedCodeFlags::empty(),
            GeneratedCode::Analyze => GeneratedCodeFlags::ANALYZE,
            GeneratedCode::Report => {
                GeneratedCodeFlags::ANALYZE | GeneratedCodeFlags::REPORT_DIAGNOSTICS
            }
        }
    }
}

/// Severity as written in configuration. `none` turns the rule off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfiguredSeverity {
    None,
    Hidden,
    #[serde(alias = "suggestion")]
    Info,
    Warning,
    Error,
}

impl ConfiguredSeverity {
    fn severity(self) -> Option<Severity> {
        match self {
            ConfiguredSeverity::None => None,
            ConfiguredSeverity::Hidden => Some(Severity::Hidden),
            ConfiguredSeverity::Info => Some(Severity::Info),
            ConfiguredSeverity::Warning => Some(Severity::Warning),
            ConfiguredSeverity::Error => Some(Severity::Error),
        }
    }
}

/// Per-rule overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub severity: Option<ConfiguredSeverity>,
    /// Replacement message template with `{0}` / `{1}` slots.
    #[serde(default)]
    pub message: Option<String>,
}

/// Settings a rule ends up running with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRule {
    pub enabled: bool,
    pub severity: Severity,
    pub message_format: Cow<'static, str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub generated_code: GeneratedCode,
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,
    #[serde(default)]
    pub rules: FxHashMap<String, RuleConfig>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            generated_code: GeneratedCode::default(),
            concurrent: default_concurrent(),
            rules: FxHashMap::default(),
        }
    }
}

fn default_concurrent() -> bool {
    true
}

impl AnalyzerConfig {
    /// Parse configuration text and reject rule ids not in `known_ids`.
    pub fn from_toml_str(text: &str, known_ids: &[&str]) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = toml::from_str(text)?;
        config.validate(known_ids)?;
        Ok(config)
    }

    pub fn load(path: &Path, known_ids: &[&str]) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, known_ids)
    }

    pub fn validate(&self, known_ids: &[&str]) -> Result<(), ConfigError> {
        let mut ids: Vec<_> = self.rules.keys().collect();
        ids.sort();
        match ids.into_iter().find(|id| !known_ids.contains(&id.as_str())) {
            Some(unknown) => Err(ConfigError::UnknownRule(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Whether a rule (or suppression) with `id` is switched on.
    pub fn is_enabled(&self, id: &str, enabled_by_default: bool) -> bool {
        match self.rules.get(id) {
            Some(rule) => {
                rule.enabled.unwrap_or(enabled_by_default)
                    && rule.severity != Some(ConfiguredSeverity::None)
            }
            None => enabled_by_default,
        }
    }

    /// Resolve the settings for `descriptor` against its defaults.
    pub fn rule(&self, descriptor: &DiagnosticDescriptor) -> EffectiveRule {
        let overrides = self.rules.get(descriptor.id);
        let severity = overrides
            .and_then(|rule| rule.severity)
            .and_then(ConfiguredSeverity::severity)
            .unwrap_or(descriptor.default_severity);
        let message_format = overrides
            .and_then(|rule| rule.message.clone())
            .map_or(Cow::Borrowed(descriptor.message_format), Cow::Owned);

        EffectiveRule {
            enabled: self.is_enabled(descriptor.id, descriptor.enabled_by_default),
            severity,
            message_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "AvoidImplicitBoxing",
        title: "Avoid implicit boxing",
        message_format: "{0} implicitly boxed to {1}",
        category: "Conversions",
        default_severity: Severity::Warning,
        enabled_by_default: true,
        description: "",
    };

    const KNOWN: &[&str] = &["AvoidImplicitBoxing", "SPR0004"];

    #[test]
    fn defaults() {
        let config = AnalyzerConfig::from_toml_str("", KNOWN).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert!(config.concurrent);
        assert_eq!(config.generated_code.flags(), GeneratedCodeFlags::empty());

        let rule = config.rule(&RULE);
        assert!(rule.enabled);
        assert_eq!(rule.severity, Severity::Warning);
        assert_eq!(rule.message_format, "{0} implicitly boxed to {1}");
    }

    #[test]
    fn rule_overrides() {
        let text = r#"
            generated_code = "report"
            concurrent = false

            [rules.AvoidImplicitBoxing]
            severity = "error"
            message = "boxing {0} as {1}"

            [rules.SPR0004]
            enabled = false
        "#;
        let config = AnalyzerConfig::from_toml_str(text, KNOWN).unwrap();
        assert!(!config.concurrent);
        assert_eq!(config.generated_code.flags(), GeneratedCodeFlags::all());

        let rule = config.rule(&RULE);
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.message_format, "boxing {0} as {1}");
        assert!(!config.is_enabled("SPR0004", true));
    }

    #[test]
    fn severity_none_disables() {
        let text = "[rules.AvoidImplicitBoxing]\nseverity = \"none\"\n";
        let config = AnalyzerConfig::from_toml_str(text, KNOWN).unwrap();
        let rule = config.rule(&RULE);
        assert!(!rule.enabled);
        assert_eq!(rule.severity, Severity::Warning);
    }

    #[test]
    fn suggestion_alias() {
        let text = "[rules.AvoidImplicitBoxing]\nseverity = \"suggestion\"\n";
        let config = AnalyzerConfig::from_toml_str(text, KNOWN).unwrap();
        assert_eq!(config.rule(&RULE).severity, Severity::Info);
    }

    #[test]
    fn unknown_rule_rejected() {
        let text = "[rules.CA1000]\nenabled = false\n";
        let err = AnalyzerConfig::from_toml_str(text, KNOWN).unwrap_err();
        let ConfigError::UnknownRule(ref id) = err else {
            panic!("expected an unknown rule, got {err:?}");
        };
        assert_eq!(id, "CA1000");
        assert_eq!(err.to_string(), "unknown rule id 'CA1000'");
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = AnalyzerConfig::from_toml_str("generated_code = \"sometimes\"", KNOWN)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file() {
        let err = AnalyzerConfig::load(Path::new("/nonexistent/avoid-boxing.toml"), KNOWN)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
