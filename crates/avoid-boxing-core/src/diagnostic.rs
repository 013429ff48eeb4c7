//! Diagnostic and suppression records.
//!
//! Descriptors are static metadata published by a rule. Records are the
//! individual findings handed to the host; the analyzer never reads them back
//! except when a suppressor inspects another rule's output.

use std::fmt;

use crate::Location;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Hidden,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Hidden => "hidden",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Static metadata describing a diagnostic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    /// Stable identifier used by editors, build output and suppression files.
    pub id: &'static str,
    pub title: &'static str,
    /// Message template with positional `{0}`, `{1}`, ... slots.
    pub message_format: &'static str,
    pub category: &'static str,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
    pub description: &'static str,
}

/// Static metadata describing a suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionDescriptor {
    pub id: &'static str,
    /// Id of the diagnostic rule this suppression applies to.
    pub suppressed_diagnostic_id: &'static str,
    pub justification: &'static str,
}

/// A single reported finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub id: String,
    pub severity: Severity,
    pub location: Location,
    /// Message arguments, in template slot order.
    pub arguments: Vec<String>,
    /// Rendered message.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic rendering `format` with `arguments`.
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        format: &str,
        location: Location,
        arguments: Vec<String>,
    ) -> Self {
        let message = format_message(format, &arguments);
        Self {
            id: id.into(),
            severity,
            location,
            arguments,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.location, self.severity, self.id, self.message
        )
    }
}

/// A decision that a reported diagnostic should not be surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    pub descriptor: SuppressionDescriptor,
    pub diagnostic: Diagnostic,
}

impl Suppression {
    pub fn new(descriptor: &SuppressionDescriptor, diagnostic: &Diagnostic) -> Self {
        Self {
            descriptor: descriptor.clone(),
            diagnostic: diagnostic.clone(),
        }
    }
}

/// Substitute positional `{N}` slots in `format`.
///
/// Slots without a matching argument are left untouched, as is any brace
/// that does not form a slot.
pub fn format_message(format: &str, arguments: &[String]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let slot = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|n| (n, close)));

        match slot.and_then(|(n, close)| arguments.get(n).map(|arg| (arg, close))) {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Span, TreeId};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn format_positional_slots() {
        assert_eq!(
            format_message("{0} implicitly boxed to {1}", &args(&["int", "object"])),
            "int implicitly boxed to object"
        );
        assert_eq!(
            format_message("from '{1}' back to '{0}'", &args(&["a", "b"])),
            "from 'b' back to 'a'"
        );
    }

    #[test]
    fn format_leaves_unknown_slots() {
        assert_eq!(format_message("{2} and {x}", &args(&["a"])), "{2} and {x}");
        assert_eq!(format_message("open { only", &[]), "open { only");
    }

    #[test]
    fn diagnostic_display() {
        let diag = Diagnostic::new(
            "AvoidImplicitBoxing",
            Severity::Warning,
            "{0} implicitly boxed to {1}",
            Location::in_tree(TreeId(0), Span::new(6, 20, 1)),
            args(&["int", "object"]),
        );
        assert_eq!(
            diag.to_string(),
            "#0:6:20: warning AvoidImplicitBoxing: int implicitly boxed to object"
        );
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Hidden);
    }
}
