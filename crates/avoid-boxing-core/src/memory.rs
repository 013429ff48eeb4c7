//! An in-memory compilation.
//!
//! Stands in for a full compiler front end: callers build syntax trees and
//! operation trees by hand and get a [`Compilation`] the analyzer can run
//! over. Used by the test suites and benches, and by embedding hosts that
//! already have their own tree and only need the adapter.

use std::ops::RangeInclusive;

use rustc_hash::FxHashMap;

use crate::{
    Compilation, Dialect, Operation, SemanticModel, Span, SyntaxId, SyntaxKind, SyntaxNode,
    SyntaxTree, TreeId, TypeDescriptor, TypeHash,
};

/// Framework types with a keyword spelling: (type, C#, Visual Basic).
const KEYWORD_TYPES: [(&str, Option<&str>, &str); 16] = [
    ("System.Boolean", Some("bool"), "Boolean"),
    ("System.Byte", Some("byte"), "Byte"),
    ("System.SByte", Some("sbyte"), "SByte"),
    ("System.Char", Some("char"), "Char"),
    ("System.Int16", Some("short"), "Short"),
    ("System.UInt16", Some("ushort"), "UShort"),
    ("System.Int32", Some("int"), "Integer"),
    ("System.UInt32", Some("uint"), "UInteger"),
    ("System.Int64", Some("long"), "Long"),
    ("System.UInt64", Some("ulong"), "ULong"),
    ("System.Single", Some("float"), "Single"),
    ("System.Double", Some("double"), "Double"),
    ("System.Decimal", Some("decimal"), "Decimal"),
    ("System.DateTime", None, "Date"),
    ("System.String", Some("string"), "String"),
    ("System.Object", Some("object"), "Object"),
];

/// Keyword spellings of framework types in one dialect, keyed by type hash.
#[derive(Debug, Clone, Default)]
pub struct KeywordAliases {
    by_hash: FxHashMap<TypeHash, &'static str>,
}

impl KeywordAliases {
    pub fn for_dialect(dialect: Dialect) -> Self {
        let by_hash = KEYWORD_TYPES
            .iter()
            .filter_map(|&(name, csharp, visual_basic)| {
                let keyword = match dialect {
                    Dialect::CSharp => csharp?,
                    Dialect::VisualBasic => visual_basic,
                };
                Some((TypeHash::from_name(name), keyword))
            })
            .collect();
        Self { by_hash }
    }

    /// The keyword for `ty`. Unresolved types never have one.
    pub fn get(&self, ty: &TypeDescriptor) -> Option<&'static str> {
        self.by_hash.get(&ty.hash).copied()
    }
}

/// A namespace import (`using System;` / `Imports System`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub namespace: String,
    /// Lines the import is in scope for. `None` means the whole file.
    pub lines: Option<RangeInclusive<u32>>,
}

impl Import {
    fn in_scope_at(&self, position: Span) -> bool {
        self.lines
            .as_ref()
            .is_none_or(|lines| lines.contains(&position.line))
    }
}

/// Semantic model for one hand-built tree.
#[derive(Debug, Clone)]
pub struct MemorySemanticModel {
    tree: SyntaxTree,
    operations: Vec<Operation>,
    imports: Vec<Import>,
    aliases: KeywordAliases,
}

impl MemorySemanticModel {
    pub fn new(tree: SyntaxTree) -> Self {
        Self {
            aliases: KeywordAliases::for_dialect(tree.dialect),
            tree,
            operations: Vec::new(),
            imports: Vec::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.tree.dialect
    }

    pub fn tree_mut(&mut self) -> &mut SyntaxTree {
        &mut self.tree
    }

    /// Add a syntax node to the tree.
    pub fn add_syntax(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        parent: Option<SyntaxId>,
    ) -> SyntaxId {
        self.tree.push_node(kind, span, parent)
    }

    /// Add a root operation, such as a method body.
    pub fn add_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Bring a namespace into scope for the whole file.
    pub fn add_import(&mut self, namespace: impl Into<String>) {
        self.imports.push(Import {
            namespace: namespace.into(),
            lines: None,
        });
    }

    /// Bring a namespace into scope for a range of lines.
    pub fn add_scoped_import(&mut self, namespace: impl Into<String>, lines: RangeInclusive<u32>) {
        self.imports.push(Import {
            namespace: namespace.into(),
            lines: Some(lines),
        });
    }
}

impl SemanticModel for MemorySemanticModel {
    fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn operation_for_syntax(&self, node: &SyntaxNode) -> Option<&Operation> {
        // Implicit conversions share their operand's syntax; the node binds to
        // the operation the user actually wrote.
        let mut bound = Vec::new();
        for root in &self.operations {
            root.walk(&mut |op| {
                if op.syntax == node.id {
                    bound.push(op);
                }
            });
        }
        bound
            .iter()
            .find(|op| !op.is_implicit)
            .or_else(|| bound.first())
            .copied()
    }

    fn minimal_display_name(&self, ty: &TypeDescriptor, position: Span) -> String {
        if let Some(keyword) = self.aliases.get(ty) {
            return keyword.to_string();
        }
        let imported = ty.namespace().is_some_and(|ns| {
            self.imports
                .iter()
                .any(|import| import.namespace == ns && import.in_scope_at(position))
        });
        if imported {
            ty.simple_name().to_string()
        } else {
            ty.qualified_name.clone()
        }
    }
}

/// A set of hand-built trees forming one compilation.
#[derive(Debug, Default)]
pub struct MemoryCompilation {
    models: FxHashMap<TreeId, MemorySemanticModel>,
    next_tree: u32,
}

impl MemoryCompilation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty tree and return its model for building.
    pub fn add_tree(
        &mut self,
        path: impl Into<String>,
        dialect: Dialect,
    ) -> &mut MemorySemanticModel {
        let id = TreeId(self.next_tree);
        self.next_tree += 1;
        self.models
            .entry(id)
            .or_insert_with(|| MemorySemanticModel::new(SyntaxTree::new(id, path, dialect)))
    }

    pub fn model(&self, tree: TreeId) -> Option<&MemorySemanticModel> {
        self.models.get(&tree)
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Compilation for MemoryCompilation {
    fn tree_ids(&self) -> Vec<TreeId> {
        let mut ids: Vec<_> = self.models.keys().copied().collect();
        ids.sort();
        ids
    }

    fn semantic_model(&self, tree: TreeId) -> Option<&dyn SemanticModel> {
        self.models.get(&tree).map(|m| m as &dyn SemanticModel)
    }
}
