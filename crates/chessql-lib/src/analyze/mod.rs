//! Semantic analysis shared by the parser: the type lattice, the symbol and
//! function tables, and the validation pass run over the finished tree.

pub mod function_table;
pub mod lattice;
pub mod symbol_table;
pub mod validation;


pub use function_table::{FunctionDef, FunctionSignature, FunctionTable};
pub use lattice::{BinaryOp, FilterType, TypeMismatch, UnaryOp};
pub use symbol_table::{SymbolTable, Variable, VariableKind};
pub use validation::validate;
