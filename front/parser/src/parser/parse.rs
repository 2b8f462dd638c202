// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::rc::Rc;

use super::Parser;
use crate::ast::{Block, Program, Statement, StatementKind};
use error::{VladError, VladErrorKind};
use lexer::TokenType;

impl<'a> Parser<'a> {
    pub fn parse_program(mut self) -> Result<Program, VladError> {
        let mut statements = Vec::new();

        while !self.check(&TokenType::Eof) {
            if self.check(&TokenType::Import) {
                statements.extend(self.parse_import()?);
            } else {
                statements.push(self.parse_statement()?);
            }
        }

        Ok(Program { statements })
    }

    pub(crate) fn parse_statement(&mut self) -> Result<Statement, VladError> {
        let line = self.peek().line;

        let kind = match self.peek_type() {
            TokenType::Import => {
                return Err(self
                    .error_here(
                        VladErrorKind::UnexpectedToken("`import`".to_string()),
                        "`import` is only allowed at the top level of a file",
                    )
                    .with_code("E2001")
                    .with_help("move the import out of the block"));
            }
            TokenType::Var => {
                self.advance();
                let declarators = self.parse_declarators()?;
                self.expect(TokenType::SemiColon, "after variable declaration")?;
                StatementKind::Var(declarators)
            }
            TokenType::If => StatementKind::If(self.parse_if()?),
            TokenType::While => self.parse_while()?,
            TokenType::For => StatementKind::For(self.parse_for()?),
            TokenType::Fun => StatementKind::Function(self.parse_function()?),
            TokenType::Return => self.parse_return()?,
            TokenType::Continue => {
                self.advance();
                self.expect(TokenType::SemiColon, "after `continue`")?;
                StatementKind::Continue
            }
            TokenType::Break => {
                self.advance();
                self.expect(TokenType::SemiColon, "after `break`")?;
                StatementKind::Break
            }
            TokenType::Print => self.parse_print()?,
            _ => {
                let expr = self.parse_expression()?;
                self.expect(TokenType::SemiColon, "after expression")?;
                StatementKind::Expression(expr)
            }
        };

        Ok(Statement { kind, file: Rc::clone(&self.file), line })
    }

    pub(crate) fn parse_block(&mut self) -> Result<Block, VladError> {
        self.expect(TokenType::Lbrace, "to open a block")?;

        let mut statements = Vec::new();
        while !self.check(&TokenType::Rbrace) {
            if self.check(&TokenType::Eof) {
                return Err(self.unexpected("before the block was closed").with_help("add a closing `}`"));
            }
            statements.push(self.parse_statement()?);
        }

        self.advance(); // '}'
        Ok(Block { statements })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parse;
    use error::{Phase, VladErrorKind};
    use lexer::Lexer;

    fn parse_str(source: &str) -> Result<Program, error::VladError> {
        parse(Lexer::new(source).tokenize()?)
    }

    fn statements(source: &str) -> Vec<StatementKind> {
        parse_str(source).unwrap().statements.into_iter().map(|s| s.kind).collect()
    }

    fn int(v: i64) -> Expression {
        Expression::Literal(Literal::Int(v))
    }

    fn var(name: &str) -> Expression {
        Expression::Variable(name.to_string())
    }

    fn bin(left: Expression, operator: Operator, right: Expression) -> Expression {
        Expression::BinaryExpression { left: Box::new(left), operator, right: Box::new(right) }
    }

    #[test]
    fn empty_program() {
        assert!(statements("").is_empty());
    }

    #[test]
    fn statements_record_their_line() {
        let program = parse_str("var a = 1;\n\nprint(a);").unwrap();
        let lines: Vec<usize> = program.statements.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn declarator_list() {
        let kinds = statements("var a: int, b = 2, c[3]: char {'x', 'y', 'z'};");
        let StatementKind::Var(decls) = &kinds[0] else { panic!("expected var") };
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0], Declarator { name: "a".into(), var_type: Some(VladType::Int), kind: DeclaratorKind::Default });
        assert_eq!(decls[1].kind, DeclaratorKind::Initialized(int(2)));
        match &decls[2].kind {
            DeclaratorKind::Array { size, init: Some(init) } => {
                assert_eq!(size, &int(3));
                assert_eq!(init.len(), 3);
            }
            other => panic!("unexpected declarator {:?}", other),
        }
        assert_eq!(decls[2].var_type, Some(VladType::Char));
    }

    #[test]
    fn array_initializer_after_equals() {
        let kinds = statements("var a[2]: int = {1, 2};");
        let StatementKind::Var(decls) = &kinds[0] else { panic!("expected var") };
        assert!(matches!(&decls[0].kind, DeclaratorKind::Array { init: Some(v), .. } if v.len() == 2));
    }

    #[test]
    fn declarations_need_a_type_or_value() {
        let err = parse_str("var a;").unwrap_err();
        assert!(matches!(err.kind, VladErrorKind::InvalidType(_)));
        let err = parse_str("var a[3];").unwrap_err();
        assert!(matches!(err.kind, VladErrorKind::InvalidType(_)));
    }

    #[test]
    fn if_else_if_chain() {
        let kinds = statements("if (a) { } else if (b) { print(1); } else { print(2); }");
        let StatementKind::If(node) = &kinds[0] else { panic!("expected if") };
        assert_eq!(node.condition, var("a"));
        let Some(ElseBranch::If(inner)) = &node.else_branch else { panic!("expected else-if") };
        assert_eq!(inner.then_block.statements.len(), 1);
        assert!(matches!(inner.else_branch, Some(ElseBranch::Block(_))));
    }

    #[test]
    fn for_loop_has_four_parts() {
        let kinds = statements("for (var i = 0; i < 3; i++) { print(i); }");
        let StatementKind::For(node) = &kinds[0] else { panic!("expected for") };
        assert!(matches!(node.init, ForInit::Var(_)));
        assert_eq!(node.condition, bin(var("i"), Operator::Less, int(3)));
        assert_eq!(node.post, Expression::PostIncrement("i".into()));
        assert_eq!(node.body.statements.len(), 1);
    }

    #[test]
    fn function_declaration() {
        let kinds = statements("fun add(a: int, b) -> int { return a + b; }");
        let StatementKind::Function(func) = &kinds[0] else { panic!("expected fun") };
        assert_eq!(func.name, "add");
        assert_eq!(func.parameters[0].param_type, Some(VladType::Int));
        assert_eq!(func.parameters[1].param_type, None);
        assert_eq!(func.return_type, VladType::Int);
        assert_eq!(
            func.body.statements[0].kind,
            StatementKind::Return(Some(bin(var("a"), Operator::Add, var("b"))))
        );
    }

    #[test]
    fn function_without_arrow_returns_void() {
        let kinds = statements("fun f() { }");
        let StatementKind::Function(func) = &kinds[0] else { panic!("expected fun") };
        assert_eq!(func.return_type, VladType::Void);
        assert!(func.parameters.is_empty());
    }

    #[test]
    fn print_takes_several_arguments() {
        let kinds = statements("print(1, \"a\", x);");
        assert!(matches!(&kinds[0], StatementKind::Print(args) if args.len() == 3));
        assert!(parse_str("print();").is_err());
    }

    #[test]
    fn bare_return_and_loop_control() {
        assert_eq!(
            statements("return; break; continue;"),
            vec![StatementKind::Return(None), StatementKind::Break, StatementKind::Continue]
        );
    }

    #[test]
    fn import_inside_block_is_rejected() {
        let err = parse_str("while (1) { import \"x.vl\"; }").unwrap_err();
        assert_eq!(err.phase(), Phase::Parse);
    }

    #[test]
    fn missing_semicolon_is_fatal() {
        let err = parse_str("var a = 1\nprint(a);").unwrap_err();
        assert!(matches!(err.kind, VladErrorKind::ExpectedToken(_)));
        assert_eq!(err.line, 2);
    }

    #[test]
    fn unclosed_block_is_fatal() {
        assert!(parse_str("if (1) { print(1);").is_err());
    }
}
