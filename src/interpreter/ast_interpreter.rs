use crate::parser::{self, AstKind, Op};

use super::{Runtime, RuntimeError};

pub struct AstInterpreter {}

impl Default for AstInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    /// Walk `program` against the runtime's tape, output is flushed even if the run fails
    pub fn interpret(
        &mut self,
        runtime: &mut Runtime,
        program: &parser::Program,
    ) -> Result<(), RuntimeError> {
        let result = self.interpret_block(runtime, program);
        let flushed = runtime.flush();
        result?;
        flushed?;
        Ok(())
    }

    fn interpret_block(
        &mut self,
        runtime: &mut Runtime,
        block: &parser::BasicBlock,
    ) -> Result<(), RuntimeError> {
        for instruction in block.instructions.iter() {
            match instruction {
                AstKind::Op(op) => self.step(runtime, *op)?,
                AstKind::Loop(sub_block) => {
                    while !runtime.tape().value_is_zero() {
                        if runtime.take_interrupt() {
                            return Err(RuntimeError::Interrupted);
                        }
                        self.interpret_block(runtime, sub_block)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn step(&mut self, runtime: &mut Runtime, op: Op) -> Result<(), RuntimeError> {
        match op {
            Op::ShiftRight => runtime.tape_mut().move_right(),
            Op::ShiftLeft => runtime.tape_mut().move_left()?,
            Op::DerefIncrement => runtime.tape_mut().increment(),
            Op::DerefDecrement => runtime.tape_mut().decrement(),
            Op::Write => runtime.write()?,
            Op::Read => runtime.read()?,
        }
        Ok(())
    }
}
