//! Parsed queries: the typed filter tree together with the declarations
//! collected while building it.

mod printer;
mod query;
mod tree;

pub use printer::QueryPrinter;
pub use query::{DEFAULT_NODE_FUEL, DEFAULT_RECURSION_LIMIT, Query, QueryBuilder, TraceEntry};
pub use tree::{FilterNode, NodeId, NodeKind, NodeValue, Tree};
