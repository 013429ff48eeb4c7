//! Provider traits over the host's semantic model.
//!
//! The analyzer never builds trees or classifies conversions itself. A host
//! hands it one [`SemanticModel`] per syntax tree, grouped in a
//! [`Compilation`]. Both are read-only and shared across threads.

use crate::{Operation, Span, SyntaxNode, SyntaxTree, TreeId, TypeDescriptor};

/// Semantic information for one syntax tree.
pub trait SemanticModel: Send + Sync {
    /// The syntax tree this model was built for.
    fn tree(&self) -> &SyntaxTree;

    /// Root operations of the tree (method bodies, field initializers, ...).
    fn operations(&self) -> &[Operation];

    /// The operation bound from `node`, if the host bound one.
    fn operation_for_syntax(&self, node: &SyntaxNode) -> Option<&Operation>;

    /// The shortest name for `ty` that is valid at `position`.
    ///
    /// Keyword aliases and namespace imports in scope at `position` are taken
    /// into account, so `System.Int32` renders as `int` in C#.
    fn minimal_display_name(&self, ty: &TypeDescriptor, position: Span) -> String;
}

/// All semantic models of one analysis pass.
pub trait Compilation: Send + Sync {
    /// Trees in the compilation, in a stable order.
    fn tree_ids(&self) -> Vec<TreeId>;

    /// The model for `tree`, or `None` if the tree is not part of this
    /// compilation.
    fn semantic_model(&self, tree: TreeId) -> Option<&dyn SemanticModel>;
}
