/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root, the node families and the Spanned trait
/// - declarations: Record, enum and type alias declarations
/// - types: Type expression nodes
/// - expressions: Literal expression nodes
/// - visitor: Read-only traversal
/// - display: Textual rendering
pub mod ast;
pub mod declarations;
pub mod display;
pub mod expressions;
pub mod types;
pub mod visitor;
