pub mod ast_interpreter;
pub mod tape;

use std::{
    io::{self, ErrorKind, Read, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use clap::ValueEnum;
use thiserror::Error;

use self::tape::Tape;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("segmentation fault: data pointer moved left of cell 0")]
    OutOfBounds,

    #[error("input exhausted")]
    UnexpectedEof,

    #[error("interrupted")]
    Interrupted,

    #[error("io error: {0}")]
    Io(
        #[from]
        std::io::Error,
    ),
}

/// What `,` does once the input stream has no bytes left
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofPolicy {
    /// Store 0 in the current cell
    #[default]
    Zero,
    /// Leave the current cell as it is
    Unchanged,
    /// Abort the run
    Fail,
}

pub struct Runtime<'a> {
    tape: Tape,

    in_stream: Box<dyn Read + 'a>,
    out_stream: Box<dyn Write + 'a>,

    eof_policy: EofPolicy,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<'a> Runtime<'a> {
    pub fn new(in_stream: Box<dyn Read + 'a>, out_stream: Box<dyn Write + 'a>) -> Self {
        Self {
            tape: Tape::new(),
            in_stream,
            out_stream,
            eof_policy: EofPolicy::default(),
            interrupted: None,
        }
    }

    pub fn with_eof_policy(mut self, eof_policy: EofPolicy) -> Self {
        self.eof_policy = eof_policy;
        self
    }

    /// Runs are aborted with [`RuntimeError::Interrupted`] once `flag` is raised,
    /// the flag is lowered again when that happens
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    pub fn reset(&mut self) {
        self.tape.reset();
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn tape_mut(&mut self) -> &mut Tape {
        &mut self.tape
    }

    /// Read one byte from the input stream into the data pointer
    pub fn read(&mut self) -> Result<(), RuntimeError> {
        // anything we're waiting on the user to respond to should be visible first
        self.out_stream.flush()?;
        if self.take_interrupt() {
            return Err(RuntimeError::Interrupted);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.in_stream.read(&mut byte) {
                Ok(0) => {
                    return match self.eof_policy {
                        EofPolicy::Zero => {
                            self.tape.write(0);
                            Ok(())
                        }
                        EofPolicy::Unchanged => Ok(()),
                        EofPolicy::Fail => Err(RuntimeError::UnexpectedEof),
                    }
                }
                // a restarted read can still hand back a byte after Ctrl-C
                Ok(_) if self.take_interrupt() => return Err(RuntimeError::Interrupted),
                Ok(_) => {
                    self.tape.write(i32::from(byte[0]));
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    if self.take_interrupt() {
                        return Err(RuntimeError::Interrupted);
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Write the byte at the data pointer to the output stream
    pub fn write(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.write_all(&[self.tape.read()])?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out_stream.flush()
    }

    /// Has someone asked for the current run to stop? Clears the request.
    pub fn take_interrupt(&self) -> bool {
        match &self.interrupted {
            Some(flag) => flag.swap(false, Ordering::SeqCst),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_stores_the_next_byte() {
        let mut runtime = Runtime::new(Box::new(&b"AB"[..]), Box::new(io::sink()));
        runtime.read().unwrap();
        assert_eq!(runtime.tape().read(), b'A');
        runtime.read().unwrap();
        assert_eq!(runtime.tape().read(), b'B');
    }

    #[test]
    fn eof_policies() {
        let mut runtime = Runtime::new(Box::new(io::empty()), Box::new(io::sink()));
        runtime.tape_mut().write(9);
        runtime.read().unwrap();
        assert_eq!(runtime.tape().read(), 0);

        let mut runtime = Runtime::new(Box::new(io::empty()), Box::new(io::sink()))
            .with_eof_policy(EofPolicy::Unchanged);
        runtime.tape_mut().write(9);
        runtime.read().unwrap();
        assert_eq!(runtime.tape().read(), 9);

        let mut runtime = Runtime::new(Box::new(io::empty()), Box::new(io::sink()))
            .with_eof_policy(EofPolicy::Fail);
        assert!(matches!(runtime.read(), Err(RuntimeError::UnexpectedEof)));
    }

    #[test]
    fn write_emits_the_raw_byte() {
        let mut out: Vec<u8> = vec![];
        {
            let mut runtime = Runtime::new(Box::new(io::empty()), Box::new(&mut out));
            runtime.tape_mut().write(200);
            runtime.write().unwrap();
        }
        assert_eq!(out, vec![200]);
    }

    /// Raises the flag and fails like a read cut short by a signal, then has a byte ready
    struct SignalledInput {
        flag: Arc<AtomicBool>,
        signalled: bool,
    }

    impl Read for SignalledInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.signalled {
                self.signalled = true;
                self.flag.store(true, Ordering::SeqCst);
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            buf[0] = b'x';
            Ok(1)
        }
    }

    #[test]
    fn ctrl_c_while_waiting_for_input_aborts_the_read() {
        let flag = Arc::new(AtomicBool::new(false));
        let input = SignalledInput {
            flag: flag.clone(),
            signalled: false,
        };
        let mut runtime = Runtime::new(Box::new(input), Box::new(io::sink()))
            .with_interrupt_flag(flag.clone());
        assert!(matches!(runtime.read(), Err(RuntimeError::Interrupted)));
        assert_eq!(runtime.tape().read(), 0);
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn signal_without_ctrl_c_retries_the_read() {
        let input = SignalledInput {
            flag: Arc::new(AtomicBool::new(false)),
            signalled: false,
        };
        // no interrupt flag attached, so the raised flag is someone else's
        let mut runtime = Runtime::new(Box::new(input), Box::new(io::sink()));
        runtime.read().unwrap();
        assert_eq!(runtime.tape().read(), b'x');
    }

    #[test]
    fn pending_ctrl_c_stops_a_read_before_it_blocks() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut runtime = Runtime::new(Box::new(&b"y"[..]), Box::new(io::sink()))
            .with_interrupt_flag(flag);
        assert!(matches!(runtime.read(), Err(RuntimeError::Interrupted)));
        assert_eq!(runtime.tape().read(), 0);
    }

    #[test]
    fn interrupt_flag_is_cleared_once_seen() {
        let flag = Arc::new(AtomicBool::new(true));
        let runtime = Runtime::new(Box::new(io::empty()), Box::new(io::sink()))
            .with_interrupt_flag(flag.clone());
        assert!(runtime.take_interrupt());
        assert!(!runtime.take_interrupt());
        assert!(!flag.load(Ordering::SeqCst));
    }
}
