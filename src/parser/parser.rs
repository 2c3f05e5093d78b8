use crate::lexer::{LexerTokenKind, Token};

use super::{AstKind, BasicBlock, Op, ParseError, Program};

pub struct Parser<'a> {
    tokens: std::slice::Iter<'a, Token>,

    /// Blocks enclosing the one currently being filled, innermost last
    branch_stack: Vec<BasicBlock>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens: tokens.iter(),
            branch_stack: vec![],
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut current = BasicBlock::default();

        for token in self.tokens.by_ref() {
            let op = match token.kind {
                LexerTokenKind::Increment => Op::ShiftRight,
                LexerTokenKind::Decrement => Op::ShiftLeft,
                LexerTokenKind::DerefIncrement => Op::DerefIncrement,
                LexerTokenKind::DerefDecrement => Op::DerefDecrement,
                LexerTokenKind::Write => Op::Write,
                LexerTokenKind::Read => Op::Read,
                LexerTokenKind::JumpStart => {
                    self.branch_stack.push(std::mem::take(&mut current));
                    continue;
                }
                LexerTokenKind::JumpEnd => {
                    let Some(mut parent) = self.branch_stack.pop() else {
                        return Err(ParseError::UnexpectedClosingBracket {
                            line: token.position.line,
                            col: token.position.col,
                        });
                    };
                    parent.instructions.push(AstKind::Loop(current));
                    current = parent;
                    continue;
                }
                // we aren't outputting comments to AST
                LexerTokenKind::Comment(_) => continue,
            };
            current.instructions.push(AstKind::Op(op));
        }

        // unclosed `[` are not an error, the loop just runs to the end of the input
        while let Some(mut parent) = self.branch_stack.pop() {
            parent.instructions.push(AstKind::Loop(current));
            current = parent;
        }

        Ok(current)
    }
}
