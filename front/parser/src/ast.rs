// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VladType {
    Int,
    Float,
    Char,
    String,
    Void,
}

impl fmt::Display for VladType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VladType::Int => "int",
            VladType::Float => "float",
            VladType::Char => "char",
            VladType::String => "string",
            VladType::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// Root of a parsed file with every `import` already spliced in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    /// File the statement was read from; differs from the root file for
    /// statements spliced in by `import`.
    pub file: Rc<str>,
    /// Line of the statement's first token.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Var(Vec<Declarator>),
    If(IfNode),
    While { condition: Expression, body: Block },
    For(ForNode),
    Function(FunctionNode),
    Return(Option<Expression>),
    Continue,
    Break,
    Print(Vec<Expression>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfNode {
    pub condition: Expression,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    If(Box<IfNode>),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForNode {
    pub init: ForInit,
    pub condition: Expression,
    pub post: Expression,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Var(Vec<Declarator>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: String,
    pub parameters: Vec<ParameterNode>,
    pub return_type: VladType,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterNode {
    pub name: String,
    pub param_type: Option<VladType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: String,
    pub var_type: Option<VladType>,
    pub kind: DeclaratorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclaratorKind {
    /// `var x: int;` binds the zero value of the annotated type.
    Default,
    Initialized(Expression),
    Array {
        size: Expression,
        init: Option<Vec<Expression>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Variable(String),
    BinaryExpression {
        left: Box<Expression>,
        operator: Operator,
        right: Box<Expression>,
    },
    Assignment {
        target: Box<Expression>,
        value: Box<Expression>,
    },
    Not(Box<Expression>),
    IndexAccess {
        name: String,
        index: Box<Expression>,
    },
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    PostIncrement(String),
    PostDecrement(String),
    ListLiteral(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(u8),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
    Add,
    Subtract,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
    NotEqual,
    LogicalAnd,
    LogicalOr,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
        };
        write!(f, "{}", symbol)
    }
}
