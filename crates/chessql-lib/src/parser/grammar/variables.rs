//! Identifiers, assignment, dictionaries and binding-state queries.

use rowan::TextRange;

use crate::analyze::FilterType;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::core::{PResult, ParamBinding};
use crate::parser::{Parser, SyntaxKind};
use crate::query::{FilterNode, NodeId, NodeKind, NodeValue};

impl Parser<'_> {
    /// Whether the statement at the current token is an assignment:
    /// `x = ...`, `x += ...`, or `v[key] = ...`.
    pub(super) fn at_assignment(&self) -> bool {
        if self.current() != SyntaxKind::Ident {
            return false;
        }
        let next = self.peek(1);
        if next == SyntaxKind::Equals || next.is_compound_assign() {
            return true;
        }
        if next != SyntaxKind::BracketOpen {
            return false;
        }
        let mut depth = 0usize;
        let mut n = 1;
        loop {
            match self.peek(n) {
                SyntaxKind::BracketOpen => depth += 1,
                SyntaxKind::BracketClose => {
                    depth -= 1;
                    if depth == 0 {
                        return self.peek(n + 1) == SyntaxKind::Equals;
                    }
                }
                SyntaxKind::Eof => return false,
                _ => {}
            }
            n += 1;
        }
    }

    /// Rejects names that cannot be (re)bound as variables.
    pub(super) fn check_assignable(&self, name: &str, span: TextRange) -> PResult<()> {
        if self.lookup_param(name).is_some() {
            return Err(Diagnostic::new(DiagnosticKind::AssignToParameter, span).message(name));
        }
        if let Some(def) = self.functions.get(name) {
            return Err(Diagnostic::new(DiagnosticKind::DuplicateDefinition, span)
                .message(name)
                .related_to("function declared here", def.span));
        }
        Ok(())
    }

    pub(super) fn parse_assignment(&mut self) -> PResult {
        if self.peek(1) == SyntaxKind::BracketOpen {
            return self.parse_dictionary_assignment();
        }

        let name_token = self.bump();
        let name = self.text(&name_token);
        self.check_assignable(name, name_token.span)?;
        let op = self.bump();
        let rhs = self.parse_expr()?;
        let rhs_ty = self.ty(rhs);

        let kind = match op.kind {
            SyntaxKind::Equals => {
                self.symbols
                    .declare_or_check(name, rhs_ty, name_token.span)?;
                NodeKind::Assign
            }
            kind => {
                let Some(var) = self.symbols.get(name) else {
                    return Err(Diagnostic::new(DiagnosticKind::UndefinedName, name_token.span)
                        .message(name));
                };
                let numeric = !var.is_dictionary()
                    && matches!(var.ty, Some(FilterType::Numeric | FilterType::Any));
                if !numeric {
                    let found = match var.ty {
                        Some(ty) if !var.is_dictionary() => ty.to_string(),
                        _ => "a dictionary".to_string(),
                    };
                    let op_text = self.text(&op);
                    return Err(Diagnostic::new(DiagnosticKind::UnexpectedType, name_token.span)
                        .message(format!("`{op_text}` needs a Numeric variable, `{name}` is {found}")));
                }
                self.expect_numeric(rhs, "the right side of a compound assignment")?;
                compound_assign_kind(kind)
            }
        };
        self.symbols.bind(name);

        let var_ty = self
            .symbols
            .get(name)
            .and_then(|var| var.ty)
            .unwrap_or(rhs_ty);
        let var = self.named_leaf(NodeKind::Variable, var_ty, name_token.span, name)?;
        let span = self.span_from(name_token.span.start());
        self.node(kind, FilterType::Logical, span, vec![var, rhs])
    }

    /// `v[key] = value`; the dictionary must already be declared.
    fn parse_dictionary_assignment(&mut self) -> PResult {
        let start = self.current_span().start();
        let (access, name, key_ty) = self.parse_dictionary_key()?;
        self.expect(SyntaxKind::Equals, "`=`")?;
        let value = self.parse_expr()?;
        let value_ty = self.symbols.check_entry(
            &name,
            key_ty,
            Some(self.ty(value)),
            self.span_from(start),
        )?;
        self.retype(access, value_ty);
        let span = self.span_from(start);
        self.node(NodeKind::Assign, FilterType::Logical, span, vec![access, value])
    }

    /// `name [ key ]`. Returns the `DictionaryAccess` node (typed by the caller),
    /// the dictionary name and the key type.
    fn parse_dictionary_key(&mut self) -> PResult<(NodeId, String, FilterType)> {
        let name_token = self.expect(SyntaxKind::Ident, "a dictionary name")?;
        let name = self.text(&name_token).to_owned();
        match self.symbols.get(&name) {
            Some(var) if var.is_dictionary() => {}
            _ => {
                return Err(
                    Diagnostic::new(DiagnosticKind::NotADictionary, name_token.span).message(name),
                );
            }
        }
        let open = self.expect(SyntaxKind::BracketOpen, "`[`")?;
        let key = self.parse_expr()?;
        self.expect_closing(SyntaxKind::BracketClose, open.span)?;
        let key_ty = self.ty(key);
        let span = self.span_from(name_token.span.start());
        let access = self.alloc(
            FilterNode::new(NodeKind::DictionaryAccess, FilterType::Any, span)
                .with_value(NodeValue::Name(name.clone()))
                .with_children(vec![key]),
        )?;
        Ok((access, name, key_ty))
    }

    /// `dictionary v` or `dictionary v[key] = value`.
    pub(super) fn parse_dictionary_decl(&mut self) -> PResult {
        let start = self.bump().span.start();
        let name_token = self.expect(SyntaxKind::Ident, "a dictionary name")?;
        let name = self.text(&name_token);
        self.check_assignable(name, name_token.span)?;
        self.symbols.declare_dictionary(name, name_token.span)?;

        let mut children = Vec::new();
        if self.currently_is(SyntaxKind::BracketOpen) {
            // Re-enter at the name so the entry parses like any keyed assignment.
            self.pos -= 1;
            children.push(self.parse_dictionary_assignment()?);
        }
        let span = self.span_from(start);
        self.alloc(
            FilterNode::new(NodeKind::DictionaryDeclaration, FilterType::Logical, span)
                .with_value(NodeValue::Name(name.to_owned()))
                .with_children(children),
        )
    }

    /// Any identifier in expression position.
    pub(super) fn parse_identifier(&mut self) -> PResult {
        let token = self.current_token();
        let name = self.text(&token);

        if let Some(binding) = self.lookup_param(name) {
            self.bump();
            return match binding {
                ParamBinding::Placeholder => {
                    self.named_leaf(NodeKind::Parameter, FilterType::Any, token.span, name)
                }
                ParamBinding::Argument(arg) => self.copy_subtree(arg, token.span),
            };
        }

        if self.functions.contains(name) {
            return self.parse_function_call();
        }

        let Some(var) = self.symbols.get(name) else {
            let kind = if self.peek(1) == SyntaxKind::ParenOpen {
                DiagnosticKind::UndefinedFunction
            } else {
                DiagnosticKind::UndefinedName
            };
            return Err(Diagnostic::new(kind, token.span).message(name));
        };

        if var.is_dictionary() {
            if self.peek(1) != SyntaxKind::BracketOpen {
                return Err(
                    Diagnostic::new(DiagnosticKind::DictionaryWithoutKey, token.span).message(name),
                );
            }
            let start = token.span.start();
            let (access, name, key_ty) = self.parse_dictionary_key()?;
            let value_ty = self
                .symbols
                .check_entry(&name, key_ty, None, self.span_from(start))?;
            self.retype(access, value_ty);
            return Ok(access);
        }

        let ty = var.ty.unwrap_or(FilterType::Any);
        self.bump();
        self.named_leaf(NodeKind::Variable, ty, token.span, name)
    }

    /// `unbind x`, `isbound x`, `isunbound x`; the operand may name a whole dictionary.
    pub(super) fn parse_binding_query(&mut self) -> PResult {
        let keyword = self.bump();
        let kind = match keyword.kind {
            SyntaxKind::KwUnbind => NodeKind::Unbind,
            SyntaxKind::KwIsBound => NodeKind::IsBound,
            _ => NodeKind::IsUnbound,
        };
        let name_token = self.expect(SyntaxKind::Ident, "a variable name")?;
        let name = self.text(&name_token);

        if self.lookup_param(name).is_some() {
            return Err(Diagnostic::new(DiagnosticKind::AssignToParameter, name_token.span)
                .message(name));
        }
        let Some(var) = self.symbols.get(name) else {
            return Err(Diagnostic::new(DiagnosticKind::UndefinedName, name_token.span).message(name));
        };
        let (operand_kind, operand_ty) = if var.is_dictionary() {
            (NodeKind::Dictionary, FilterType::Dictionary)
        } else {
            (NodeKind::Variable, var.ty.unwrap_or(FilterType::Any))
        };

        if self.currently_is(SyntaxKind::BracketOpen) {
            if kind == NodeKind::Unbind {
                let span = name_token.span.cover(self.current_span());
                return Err(Diagnostic::new(DiagnosticKind::KeyedUnbind, span));
            }
            return Err(self.error_unexpected("expected a whole variable or dictionary name"));
        }

        if kind == NodeKind::Unbind {
            self.symbols.unbind(name, name_token.span)?;
        }
        let operand = self.named_leaf(operand_kind, operand_ty, name_token.span, name)?;
        let span = self.span_from(keyword.span.start());
        self.node(kind, FilterType::Logical, span, vec![operand])
    }

    /// Fixes the type of a node allocated before its type was known.
    fn retype(&mut self, id: NodeId, ty: FilterType) {
        self.tree.set_type(id, ty);
    }
}

fn compound_assign_kind(kind: SyntaxKind) -> NodeKind {
    match kind {
        SyntaxKind::PlusEquals => NodeKind::PlusAssign,
        SyntaxKind::MinusEquals => NodeKind::MinusAssign,
        SyntaxKind::StarEquals => NodeKind::MultiplyAssign,
        SyntaxKind::SlashEquals => NodeKind::DivideAssign,
        _ => NodeKind::ModulusAssign,
    }
}
