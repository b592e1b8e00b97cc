//! Function declarations and call-site expansion.
//!
//! A declaration is checked once with every parameter bound to a `Parameter`
//! placeholder of type `Any`. Each call re-parses the body's tokens with the
//! parameters bound to the call's arguments, so the expansion is checked
//! against concrete types.

use crate::analyze::{FilterType, FunctionDef};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::core::{PResult, ParamBinding, Scope};
use crate::parser::{Parser, SyntaxKind};
use crate::query::{FilterNode, NodeKind, NodeValue};

impl Parser<'_> {
    /// `function name(p1 p2 ...) { body }`.
    pub(super) fn parse_function_decl(&mut self) -> PResult {
        let start = self.bump().span.start();
        let name_token = self.expect(SyntaxKind::Ident, "a function name")?;
        let name = self.text(&name_token);
        if let Some(def) = self.functions.get(name) {
            return Err(
                Diagnostic::new(DiagnosticKind::DuplicateDefinition, name_token.span)
                    .message(name)
                    .related_to("first declared here", def.span),
            );
        }
        if let Some(var) = self.symbols.get(name) {
            return Err(
                Diagnostic::new(DiagnosticKind::DuplicateDefinition, name_token.span)
                    .message(name)
                    .related_to("declared as a variable here", var.span),
            );
        }

        let open = self.expect(SyntaxKind::ParenOpen, "`(` after the function name")?;
        let mut scope = Scope::new();
        while self.currently_is(SyntaxKind::Ident) {
            let param = self.bump();
            let param_name = self.text(&param);
            if scope.contains_key(param_name) {
                return Err(
                    Diagnostic::new(DiagnosticKind::DuplicateParameter, param.span)
                        .message(param_name),
                );
            }
            scope.insert(param_name.to_owned(), ParamBinding::Placeholder);
        }
        self.expect_closing(SyntaxKind::ParenClose, open.span)?;

        // Assignments in the body only take effect where it is called.
        let body_start = self.pos;
        let saved_symbols = self.symbols.clone();
        let params: Vec<String> = scope.keys().cloned().collect();
        self.scopes.push(scope);
        let body = self.parse_brace_compound();
        self.scopes.pop();
        self.symbols = saved_symbols;
        let body = body?;
        let body_ty = self.ty(body);

        let def = FunctionDef {
            name: name.to_owned(),
            params,
            body: body_start..self.pos,
            body_ty,
            span: name_token.span,
        };
        if let Err(first) = self.functions.insert(def) {
            return Err(
                Diagnostic::new(DiagnosticKind::DuplicateDefinition, name_token.span)
                    .message(name)
                    .related_to("first declared here", first),
            );
        }

        let span = self.span_from(start);
        self.alloc(
            FilterNode::new(NodeKind::Function, FilterType::Logical, span)
                .with_value(NodeValue::Name(name.to_owned()))
                .with_children(vec![body]),
        )
    }

    /// `name(arg ...)`: the arguments, then the body expanded with them.
    pub(super) fn parse_function_call(&mut self) -> PResult {
        let name_token = self.bump();
        let name = self.text(&name_token);
        let Some(def) = self.functions.get(name) else {
            return Err(
                Diagnostic::new(DiagnosticKind::UndefinedFunction, name_token.span).message(name),
            );
        };
        let params = def.params.clone();
        let body = def.body.clone();
        let decl_span = def.span;

        let open = self.expect(SyntaxKind::ParenOpen, "`(` after the function name")?;
        let mut args = Vec::new();
        while !matches!(self.current(), SyntaxKind::ParenClose | SyntaxKind::Eof) {
            args.push(self.parse_expr()?);
        }
        self.expect_closing(SyntaxKind::ParenClose, open.span)?;

        if args.len() != params.len() {
            let span = self.span_from(name_token.span.start());
            return Err(Diagnostic::new(DiagnosticKind::ArgumentCountMismatch, span)
                .message(format!(
                    "`{name}` takes {} argument(s), found {}",
                    params.len(),
                    args.len()
                ))
                .related_to("declared here", decl_span));
        }

        let scope: Scope = params
            .into_iter()
            .zip(args.iter().map(|&arg| ParamBinding::Argument(arg)))
            .collect();

        self.enter_recursion()?;
        let (saved_pos, saved_end) = (self.pos, self.end);
        self.pos = body.start;
        self.end = body.end;
        self.scopes.push(scope);
        let expanded = self.parse_brace_compound();
        self.scopes.pop();
        self.pos = saved_pos;
        self.end = saved_end;
        self.exit_recursion();
        let expanded = expanded?;

        let ty = self.ty(expanded);
        let span = self.span_from(name_token.span.start());
        let mut children = args;
        children.push(expanded);
        self.alloc(
            FilterNode::new(NodeKind::FunctionCall, ty, span)
                .with_value(NodeValue::Name(name.to_owned()))
                .with_children(children),
        )
    }
}
