use serde::Serialize;

use crate::Error;
use crate::analyze::{FunctionTable, SymbolTable};
use crate::parser::Parser;
use crate::parser::lexer::lex;

use super::printer::QueryPrinter;
use super::tree::{FilterNode, NodeId, Tree};

pub const DEFAULT_RECURSION_LIMIT: u32 = 128;
pub const DEFAULT_NODE_FUEL: u32 = 1_000_000;

/// Configures and runs one parse.
pub struct QueryBuilder<'src> {
    source: &'src str,
    recursion_limit: u32,
    node_fuel: u32,
}

impl<'src> QueryBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            node_fuel: DEFAULT_NODE_FUEL,
        }
    }

    /// Maximum nesting of statements and expressions.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Maximum number of nodes the parse may allocate, function expansions included.
    pub fn with_node_fuel(mut self, fuel: u32) -> Self {
        self.node_fuel = fuel;
        self
    }

    pub fn build(self) -> crate::Result<Query<'src>> {
        let tokens = lex(self.source).map_err(Error::Lex)?;
        let result = Parser::new(self.source, tokens)
            .with_recursion_limit(self.recursion_limit)
            .with_node_fuel(self.node_fuel)
            .parse()
            .map_err(Error::Syntax)?;

        Ok(Query {
            source: self.source,
            tree: result.tree,
            root: result.root,
            symbols: result.symbols,
            functions: result.functions,
            fuel_consumed: result.fuel_consumed,
        })
    }
}

/// A successfully parsed and type-checked query.
#[derive(Debug, Clone)]
pub struct Query<'src> {
    source: &'src str,
    tree: Tree,
    root: NodeId,
    symbols: SymbolTable,
    functions: FunctionTable,
    fuel_consumed: u32,
}

/// One line of the depth-first trace view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub depth: usize,
    pub kind: &'static str,
}

impl<'src> Query<'src> {
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The `Cql` root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &FilterNode {
        self.tree.get(self.root)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Variables and dictionaries by name, in first-declaration order.
    pub fn definitions(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Nodes allocated by the parse.
    pub fn fuel_consumed(&self) -> u32 {
        self.fuel_consumed
    }

    /// `(depth, kind)` for every node in depth-first preorder.
    pub fn trace(&self) -> Vec<TraceEntry> {
        self.tree
            .preorder(self.root)
            .into_iter()
            .map(|(depth, id)| TraceEntry {
                depth,
                kind: self.tree.kind(id).name(),
            })
            .collect()
    }

    pub fn printer(&self) -> QueryPrinter<'_, 'src> {
        QueryPrinter::new(self)
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }

    pub fn dump_with_types(&self) -> String {
        self.printer().with_types(true).dump()
    }

    pub fn dump_definitions(&self) -> String {
        self.printer().only_definitions(true).dump()
    }
}
