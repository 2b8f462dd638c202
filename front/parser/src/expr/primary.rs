// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use crate::ast::{Expression, Literal};
use crate::parser::Parser;
use error::{VladError, VladErrorKind};
use lexer::TokenType;

impl<'a> Parser<'a> {
    /// A single operand: literal, parenthesised expression, brace list,
    /// `!operand`, or an identifier form.
    pub(crate) fn parse_operand(&mut self) -> Result<Expression, VladError> {
        let expr = match self.peek_type().clone() {
            TokenType::IntLiteral(v) => {
                self.advance();
                Expression::Literal(Literal::Int(v))
            }
            TokenType::Float(v) => {
                self.advance();
                Expression::Literal(Literal::Float(v))
            }
            TokenType::CharLiteral(c) => {
                self.advance();
                Expression::Literal(Literal::Char(c))
            }
            TokenType::String(s) => {
                self.advance();
                Expression::Literal(Literal::String(s))
            }
            TokenType::Lparen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenType::Rparen, "to close parenthesised expression")?;
                inner
            }
            TokenType::Lbrace => Expression::ListLiteral(self.parse_brace_list()?),
            TokenType::Not => {
                self.advance();
                Expression::Not(Box::new(self.parse_operand()?))
            }
            TokenType::Identifier(name) => {
                self.advance();
                self.parse_identifier_tail(name)?
            }
            TokenType::Minus => {
                return Err(self
                    .unexpected("at start of expression")
                    .with_help("unary minus only applies to numeric literals such as `-1`; write `0 - x`"));
            }
            _ => return Err(self.unexpected("at start of expression")),
        };

        Ok(expr)
    }

    /// `{ expr, expr, ... }`; an empty list is allowed.
    pub(crate) fn parse_brace_list(&mut self) -> Result<Vec<Expression>, VladError> {
        self.expect(TokenType::Lbrace, "to open a list")?;

        let mut items = Vec::new();
        if !self.check(&TokenType::Rbrace) {
            loop {
                items.push(self.parse_expression()?);
                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }

        if !self.check(&TokenType::Rbrace) {
            return Err(self
                .error_here(
                    VladErrorKind::ExpectedToken("`}`".to_string()),
                    format!("expected `,` or `}}` in list, found {}", self.peek_type()),
                )
                .with_code("E2002"));
        }
        self.advance();
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parse;
    use lexer::Lexer;

    fn expr(source: &str) -> Result<Expression, error::VladError> {
        let tokens = Lexer::new(&format!("{};", source)).tokenize()?;
        let program = parse(tokens)?;
        match program.statements.into_iter().next().map(|s| s.kind) {
            Some(StatementKind::Expression(e)) => Ok(e),
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn literals() {
        assert_eq!(expr("'a'").unwrap(), Expression::Literal(Literal::Char(b'a')));
        assert_eq!(expr("\"hi\"").unwrap(), Expression::Literal(Literal::String("hi".into())));
        assert_eq!(expr("2.5").unwrap(), Expression::Literal(Literal::Float(2.5)));
    }

    #[test]
    fn not_takes_a_single_operand() {
        // `!a == b` is `(!a) == b`, not `!(a == b)`.
        assert_eq!(
            expr("!a == b").unwrap(),
            Expression::BinaryExpression {
                left: Box::new(Expression::Not(Box::new(Expression::Variable("a".into())))),
                operator: Operator::Equal,
                right: Box::new(Expression::Variable("b".into())),
            }
        );
    }

    #[test]
    fn brace_list_is_an_expression() {
        assert_eq!(
            expr("{1, 2}").unwrap(),
            Expression::ListLiteral(vec![
                Expression::Literal(Literal::Int(1)),
                Expression::Literal(Literal::Int(2)),
            ])
        );
        assert_eq!(expr("{}").unwrap(), Expression::ListLiteral(vec![]));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            expr("(1 + 2) * 3").unwrap(),
            Expression::BinaryExpression {
                left: Box::new(Expression::BinaryExpression {
                    left: Box::new(Expression::Literal(Literal::Int(1))),
                    operator: Operator::Add,
                    right: Box::new(Expression::Literal(Literal::Int(2))),
                }),
                operator: Operator::Multiply,
                right: Box::new(Expression::Literal(Literal::Int(3))),
            }
        );
    }

    #[test]
    fn unary_minus_on_identifier_is_rejected() {
        assert!(expr("-x").is_err());
        assert!(expr("1 +").is_err());
    }
}
