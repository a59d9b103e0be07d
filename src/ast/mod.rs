/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: The node type, its accessors and its S-expression rendering
pub mod ast;
