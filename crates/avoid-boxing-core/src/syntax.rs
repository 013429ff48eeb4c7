//! Read-only syntax views supplied by the host.
//!
//! The analyzer never parses. It only needs to map a reported location back
//! to the node the host built there and recognise a handful of node kinds.
//! Hosts report kinds as raw integers, so [`SyntaxKind`] converts from `u16`
//! and anything unknown is simply "not interesting".

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{Dialect, Span};

/// Identifies a syntax tree within a compilation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(pub u32);

impl fmt::Debug for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeId({})", self.0)
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyntaxId(pub u32);

/// Node kinds the analyzer knows about.
///
/// The numbering is shared by both dialects; the node's [`Dialect`] says
/// which surface syntax produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum SyntaxKind {
    CompilationUnit = 1,
    MethodBody = 2,
    LocalDeclaration = 3,
    VariableDeclarator = 4,
    Assignment = 5,
    Invocation = 6,
    Argument = 7,
    Identifier = 8,
    Literal = 9,
    Parenthesized = 10,

    /// `(T)expr`
    CastExpression = 100,

    /// `CType(expr, T)`, the narrowing cast.
    CTypeExpression = 200,
    /// `DirectCast(expr, T)`, the unchecked cast.
    DirectCastExpression = 201,
    /// `TryCast(expr, T)`, the safe cast.
    TryCastExpression = 202,
}

impl SyntaxKind {
    /// Whether this kind is a user-written cast in `dialect`.
    pub fn is_explicit_cast(self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::CSharp => matches!(self, SyntaxKind::CastExpression),
            Dialect::VisualBasic => matches!(
                self,
                SyntaxKind::CTypeExpression
                    | SyntaxKind::DirectCastExpression
                    | SyntaxKind::TryCastExpression
            ),
        }
    }
}

/// A node in a host syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub id: SyntaxId,
    /// Host kind number, see [`SyntaxKind`].
    pub raw_kind: u16,
    pub dialect: Dialect,
    pub span: Span,
    pub parent: Option<SyntaxId>,
}

impl SyntaxNode {
    /// The known kind of this node, or `None` for kinds the analyzer ignores.
    pub fn kind(&self) -> Option<SyntaxKind> {
        SyntaxKind::try_from(self.raw_kind).ok()
    }

    /// Whether this node is a cast the user wrote in its own dialect.
    pub fn is_explicit_cast(&self) -> bool {
        self.kind()
            .is_some_and(|kind| kind.is_explicit_cast(self.dialect))
    }
}

/// A source file as parsed by the host.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub id: TreeId,
    pub path: String,
    pub dialect: Dialect,
    /// Leading comment text, used to spot `<auto-generated>` headers.
    pub header: String,
    /// Set when the host itself flags the tree as generated.
    pub marked_generated: bool,
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn new(id: TreeId, path: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            id,
            path: path.into(),
            dialect,
            header: String::new(),
            marked_generated: false,
            nodes: Vec::new(),
        }
    }

    /// Append a node and return its id.
    pub fn push_node(
        &mut self,
        kind: impl Into<u16>,
        span: Span,
        parent: Option<SyntaxId>,
    ) -> SyntaxId {
        let id = SyntaxId(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode {
            id,
            raw_kind: kind.into(),
            dialect: self.dialect,
            span,
            parent,
        });
        id
    }

    pub fn node(&self, id: SyntaxId) -> Option<&SyntaxNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    /// Find the node covering `span`.
    ///
    /// Picks the smallest node that contains the span, across lines. When
    /// several nodes share that extent the outermost one wins.
    pub fn find_node(&self, span: Span) -> Option<&SyntaxNode> {
        self.nodes
            .iter()
            .filter(|node| node.span.contains(span))
            .min_by_key(|node| (node.span.nesting_key(), self.depth(node.id)))
    }

    fn depth(&self, id: SyntaxId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).and_then(|n| n.parent);
        }
        depth
    }

    /// Whether this tree holds machine-generated code.
    pub fn is_generated(&self) -> bool {
        self.marked_generated
            || is_generated_path(&self.path)
            || has_generated_header(&self.header)
    }
}

/// Whether a file path follows one of the generated-code naming conventions.
pub fn is_generated_path(path: &str) -> bool {
    const SUFFIXES: [&str; 8] = [
        ".g.cs",
        ".g.i.cs",
        ".designer.cs",
        ".generated.cs",
        ".g.vb",
        ".g.i.vb",
        ".designer.vb",
        ".generated.vb",
    ];

    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let lower = file_name.to_ascii_lowercase();
    lower.starts_with("temporarygeneratedfile_")
        || SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

fn has_generated_header(header: &str) -> bool {
    header.contains("<auto-generated") || header.contains("<autogenerated")
}
