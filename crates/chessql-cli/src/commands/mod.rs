pub mod ast;
pub mod check;
pub mod defs;
pub mod query_loader;
pub mod run_common;
pub mod trace;


pub use run_common::{Limits, QueryInput};
