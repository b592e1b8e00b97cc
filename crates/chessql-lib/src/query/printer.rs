use std::fmt::Write;

use rowan::TextRange;

use super::Query;
use super::tree::{NodeId, NodeValue};

pub struct QueryPrinter<'q, 'src> {
    query: &'q Query<'src>,
    types: bool,
    spans: bool,
    definitions: bool,
}

impl<'q, 'src> QueryPrinter<'q, 'src> {
    pub fn new(query: &'q Query<'src>) -> Self {
        Self {
            query,
            types: false,
            spans: false,
            definitions: false,
        }
    }

    pub fn with_types(mut self, value: bool) -> Self {
        self.types = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn only_definitions(mut self, value: bool) -> Self {
        self.definitions = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.definitions {
            self.format_definitions(w)
        } else {
            self.format_tree(self.query.root(), w)
        }
    }

    fn format_tree(&self, root: NodeId, w: &mut impl Write) -> std::fmt::Result {
        let tree = self.query.tree();
        for (depth, id) in tree.preorder(root) {
            let node = tree.get(id);
            let prefix = "  ".repeat(depth);
            write!(w, "{}{}", prefix, node.kind.name())?;
            self.format_value(&node.value, w)?;
            if self.spans {
                write!(w, "{}", span_str(node.span))?;
            }
            if self.types {
                write!(w, " :: {}", node.ty)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn format_value(&self, value: &NodeValue, w: &mut impl Write) -> std::fmt::Result {
        match value {
            NodeValue::None => Ok(()),
            NodeValue::Name(name) => write!(w, " {name}"),
            NodeValue::Integer(n) => write!(w, " {n}"),
            NodeValue::Text(text) => write!(w, " {text:?}"),
            NodeValue::Range { min, max } => {
                let bound = |b: &Option<i64>| b.map(|n| n.to_string()).unwrap_or_default();
                write!(w, " {}..{}", bound(min), bound(max))
            }
        }
    }

    fn format_definitions(&self, w: &mut impl Write) -> std::fmt::Result {
        for (name, var) in self.query.definitions().iter() {
            let ty = var.ty.map_or("?".to_string(), |ty| ty.to_string());
            match var.key_ty {
                Some(key) => write!(w, "{name}: dictionary[{key}] -> {ty}")?,
                None if var.is_dictionary() => write!(w, "{name}: dictionary -> {ty}")?,
                None => write!(w, "{name}: {ty}")?,
            }
            if !var.bound {
                write!(w, " (unbound)")?;
            }
            writeln!(w)?;
        }
        for def in self.query.functions().iter() {
            writeln!(
                w,
                "{}({}) -> {}",
                def.name,
                def.params.join(" "),
                def.body_ty
            )?;
        }
        Ok(())
    }
}

fn span_str(span: TextRange) -> String {
    format!(" [{}..{}]", u32::from(span.start()), u32::from(span.end()))
}
