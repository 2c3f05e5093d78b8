use std::fmt;

use thiserror::Error;

use crate::lexer::lexer::Lexer;

pub mod parser;

/// A primitive (non-loop) instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `>`
    ShiftRight,
    /// `<`
    ShiftLeft,
    /// `+`
    DerefIncrement,
    /// `-`
    DerefDecrement,
    /// `.`
    Write,
    /// `,`
    Read,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::ShiftRight => '>',
            Op::ShiftLeft => '<',
            Op::DerefIncrement => '+',
            Op::DerefDecrement => '-',
            Op::Write => '.',
            Op::Read => ',',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstKind {
    Op(Op),
    Loop(BasicBlock),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicBlock {
    pub instructions: Vec<AstKind>,
}

pub type Program = BasicBlock;

impl fmt::Display for BasicBlock {
    /// Unparses the block, every loop is printed closed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in self.instructions.iter() {
            match instruction {
                AstKind::Op(op) => write!(f, "{}", op.symbol())?,
                AstKind::Loop(body) => write!(f, "[{}]", body)?,
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error, unexpected ']' at line {line}, column {col}")]
    UnexpectedClosingBracket { line: usize, col: usize },
}

/// Lex and parse source text in one go
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = Lexer::new(source).collect();
    parser::Parser::new(&tokens).parse_program()
}
