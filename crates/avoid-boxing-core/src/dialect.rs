//! Surface syntaxes sharing the semantic model.

use std::fmt;

/// One of the two supported surface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    CSharp,
    VisualBasic,
}

impl Dialect {
    /// All supported dialects, in registration order.
    pub const ALL: [Dialect; 2] = [Dialect::CSharp, Dialect::VisualBasic];

    /// The host's language name.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::CSharp => "C#",
            Dialect::VisualBasic => "Visual Basic",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
