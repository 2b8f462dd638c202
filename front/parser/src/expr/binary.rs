// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use super::is_assignable;
use crate::ast::{Expression, Operator};
use crate::parser::Parser;
use error::{VladError, VladErrorKind};
use lexer::{Token, TokenType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
    Right,
}

/// Infix operator a token stands for when it follows an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Infix {
    Binary(Operator),
    Assign,
}

/// Precedence table; higher binds tighter.
pub(crate) fn binding_power(token_type: &TokenType) -> Option<(u8, Assoc)> {
    let entry = match token_type {
        TokenType::Star | TokenType::Div => (7, Assoc::Left),
        TokenType::Plus | TokenType::Minus => (6, Assoc::Left),
        TokenType::Rchevr | TokenType::Lchevr | TokenType::RchevrEq | TokenType::LchevrEq => (5, Assoc::Left),
        TokenType::EqualTwo | TokenType::NotEqual => (4, Assoc::Left),
        TokenType::LogicalAnd => (3, Assoc::Left),
        TokenType::LogicalOr => (2, Assoc::Left),
        TokenType::Equal => (1, Assoc::Right),
        _ => return None,
    };
    Some(entry)
}

fn infix(token_type: &TokenType) -> Option<Infix> {
    let op = match token_type {
        TokenType::Star => Operator::Multiply,
        TokenType::Div => Operator::Divide,
        TokenType::Plus => Operator::Add,
        TokenType::Minus => Operator::Subtract,
        TokenType::Rchevr => Operator::Greater,
        TokenType::Lchevr => Operator::Less,
        TokenType::RchevrEq => Operator::GreaterEqual,
        TokenType::LchevrEq => Operator::LessEqual,
        TokenType::EqualTwo => Operator::Equal,
        TokenType::NotEqual => Operator::NotEqual,
        TokenType::LogicalAnd => Operator::LogicalAnd,
        TokenType::LogicalOr => Operator::LogicalOr,
        TokenType::Equal => return Some(Infix::Assign),
        _ => return None,
    };
    Some(Infix::Binary(op))
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, VladError> {
        self.parse_binary(0)
    }

    /// Precedence climbing: keep folding operators that bind tighter than
    /// `min_prec`, or equally tight when right-associative.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expression, VladError> {
        let mut left = self.parse_operand()?;

        loop {
            self.split_negative_literal();

            let token_type = self.peek_type().clone();
            let (Some((prec, assoc)), Some(op)) = (binding_power(&token_type), infix(&token_type)) else {
                break;
            };
            if !(prec > min_prec || (prec == min_prec && assoc == Assoc::Right)) {
                break;
            }

            self.advance();
            let right = self.parse_binary(prec)?;

            left = match op {
                Infix::Binary(operator) => Expression::BinaryExpression {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                },
                Infix::Assign => {
                    if !is_assignable(&left) {
                        return Err(self
                            .error_here(VladErrorKind::InvalidAssignment, "left side of `=` is not assignable")
                            .with_code("E2004")
                            .with_help("only variables and array elements can be assigned"));
                    }
                    Expression::Assignment {
                        target: Box::new(left),
                        value: Box::new(right),
                    }
                }
            };
        }

        Ok(left)
    }

    /// The lexer folds `-<digit>` into the literal, so `n-1` arrives as
    /// `n` `-1`. In operator position such a literal is rewritten into a
    /// `-` token followed by its magnitude.
    fn split_negative_literal(&mut self) {
        let token = self.peek();
        if !token.lexeme.starts_with('-') {
            return;
        }
        let magnitude = match token.token_type {
            TokenType::IntLiteral(v) => TokenType::IntLiteral(v.wrapping_neg()),
            TokenType::Float(v) => TokenType::Float(-v),
            _ => return,
        };
        let line = token.line;
        let digits = token.lexeme[1..].to_string();

        let pos = self.pos;
        self.tokens[pos] = Token::new(magnitude, digits, line);
        self.tokens.insert(pos, Token::new(TokenType::Minus, "-", line));
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parse;
    use lexer::Lexer;

    fn expr(source: &str) -> Expression {
        let tokens = Lexer::new(&format!("{};", source)).tokenize().unwrap();
        let program = parse(tokens).unwrap();
        match program.statements.into_iter().next().map(|s| s.kind) {
            Some(StatementKind::Expression(e)) => e,
            other => panic!("expected expression statement, got {:?}", other),
        }
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

    fn assign(target: Expression, value: Expression) -> Expression {
        Expression::Assignment { target: Box::new(target), value: Box::new(value) }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            expr("2 + 3 * 4"),
            bin(int(2), Operator::Add, bin(int(3), Operator::Multiply, int(4)))
        );
    }

    #[test]
    fn same_precedence_folds_left() {
        assert_eq!(
            expr("8 - 4 - 2"),
            bin(bin(int(8), Operator::Subtract, int(4)), Operator::Subtract, int(2))
        );
        assert_eq!(
            expr("a * b * c"),
            bin(bin(var("a"), Operator::Multiply, var("b")), Operator::Multiply, var("c"))
        );
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(expr("a = b = 5"), assign(var("a"), assign(var("b"), int(5))));
    }

    #[test]
    fn logical_and_relational_levels() {
        assert_eq!(
            expr("a < 1 || b == 2 && c"),
            bin(
                bin(var("a"), Operator::Less, int(1)),
                Operator::LogicalOr,
                bin(bin(var("b"), Operator::Equal, int(2)), Operator::LogicalAnd, var("c")),
            )
        );
    }

    #[test]
    fn negative_literal_after_operand_becomes_subtraction() {
        assert_eq!(expr("n-1"), bin(var("n"), Operator::Subtract, int(1)));
        assert_eq!(expr("2 * -3"), bin(int(2), Operator::Multiply, int(-3)));
        assert_eq!(
            expr("x-1.5"),
            bin(var("x"), Operator::Subtract, Expression::Literal(Literal::Float(1.5)))
        );
    }

    #[test]
    fn array_element_is_assignable() {
        assert_eq!(
            expr("a[1] = 7"),
            assign(Expression::IndexAccess { name: "a".into(), index: Box::new(int(1)) }, int(7))
        );
    }

    #[test]
    fn literal_is_not_assignable() {
        let tokens = Lexer::new("1 = 2;").tokenize().unwrap();
        let err = parse(tokens).unwrap_err();
        assert_eq!(err.kind, error::VladErrorKind::InvalidAssignment);
    }
}
