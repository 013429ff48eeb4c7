//! The host's language-independent operation tree.
//!
//! Only the pieces the analyzer reads are modelled. Conversions carry their
//! operand and, for dialects whose host exposes one, the host's own
//! classification of the conversion.

use std::fmt;

use crate::{Dialect, Span, SyntaxId, TypeDescriptor};

/// How the host classified a conversion.
///
/// This is the C# host's verdict and accounts for nullable and generic value
/// types and user-defined operators, which a structural check cannot see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    Identity,
    ImplicitNumeric,
    ExplicitNumeric,
    Boxing,
    Unboxing,
    ImplicitReference,
    ExplicitReference,
    Nullable,
    UserDefined,
}

impl ConversionKind {
    #[inline]
    pub fn is_boxing(self) -> bool {
        matches!(self, ConversionKind::Boxing)
    }
}

/// A value-to-value conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOperation {
    pub operand: Box<Operation>,
    /// `None` when the host does not classify conversions for this dialect.
    pub classification: Option<ConversionKind>,
}

/// Coarse operation kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationKind {
    /// A method body or other statement list.
    Block,
    Conversion(ConversionOperation),
    Literal,
    LocalReference,
    Invocation,
    Other,
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Block => "Block",
            OperationKind::Conversion(_) => "Conversion",
            OperationKind::Literal => "Literal",
            OperationKind::LocalReference => "LocalReference",
            OperationKind::Invocation => "Invocation",
            OperationKind::Other => "Other",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the operation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    /// Result type. `None` for operations without a value.
    pub ty: Option<TypeDescriptor>,
    /// The syntax node this operation was bound from.
    pub syntax: SyntaxId,
    pub span: Span,
    pub dialect: Dialect,
    /// `true` when the compiler inserted this operation without user syntax.
    pub is_implicit: bool,
    /// Child operations in source order: statements of a block, arguments
    /// of an invocation, and so on. A conversion's operand is not repeated
    /// here.
    pub children: Vec<Operation>,
}

impl Operation {
    /// A user-written operation with no children.
    pub fn leaf(
        kind: OperationKind,
        ty: Option<TypeDescriptor>,
        syntax: SyntaxId,
        span: Span,
        dialect: Dialect,
    ) -> Self {
        Self {
            kind,
            ty,
            syntax,
            span,
            dialect,
            is_implicit: false,
            children: Vec::new(),
        }
    }

    /// Attach child operations.
    pub fn with_children(mut self, children: Vec<Operation>) -> Self {
        self.children = children;
        self
    }

    /// A conversion of `operand` to `ty`.
    ///
    /// Implicit conversions share the operand's syntax; explicit ones are
    /// bound from the cast node at `syntax`.
    pub fn conversion(
        operand: Operation,
        ty: TypeDescriptor,
        classification: Option<ConversionKind>,
        is_implicit: bool,
        syntax: SyntaxId,
        span: Span,
    ) -> Self {
        let dialect = operand.dialect;
        Self {
            kind: OperationKind::Conversion(ConversionOperation {
                operand: Box::new(operand),
                classification,
            }),
            ty: Some(ty),
            syntax,
            span,
            dialect,
            is_implicit,
            children: Vec::new(),
        }
    }

    pub fn as_conversion(&self) -> Option<&ConversionOperation> {
        match &self.kind {
            OperationKind::Conversion(conversion) => Some(conversion),
            _ => None,
        }
    }

    pub fn is_conversion(&self) -> bool {
        self.as_conversion().is_some()
    }

    /// Operand type of a conversion, if this is one and it was resolved.
    pub fn operand_type(&self) -> Option<&TypeDescriptor> {
        self.as_conversion().and_then(|c| c.operand.ty.as_ref())
    }

    /// Visit this operation and all its descendants, parents first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Operation)) {
        visit(self);
        if let OperationKind::Conversion(conversion) = &self.kind {
            conversion.operand.walk(visit);
        }
        for child in &self.children {
            child.walk(visit);
        }
    }
}
