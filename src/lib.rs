//! Tree walking Brainf**k interpreter
//!
//! Source text is lexed, parsed into a tree of [`parser::BasicBlock`]s and walked
//! by the [`interpreter::ast_interpreter::AstInterpreter`] against a [`interpreter::Runtime`],
//! whose tape grows to the right as needed and persists between runs.

extern crate thiserror;

pub mod interpreter;
pub mod lexer;
pub mod parser;

use thiserror::Error;

use crate::{
    interpreter::{ast_interpreter::AstInterpreter, Runtime, RuntimeError},
    parser::ParseError,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Parse `source` and run it on `runtime`, nothing executes if parsing fails
pub fn run(runtime: &mut Runtime, source: &str) -> Result<(), Error> {
    let program = parser::parse(source)?;
    AstInterpreter::new().interpret(runtime, &program)?;
    Ok(())
}
