use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use brainwalk::interpreter::{EofPolicy, Runtime};
use colored::Colorize;
use linefeed::{Interface, ReadResult, Signal};

/// Lines typed so far form a runnable program once every `[` has been closed
pub fn is_complete(buffer: &str) -> bool {
    let opened = buffer.chars().filter(|c| *c == '[').count();
    let closed = buffer.chars().filter(|c| *c == ']').count();
    opened <= closed
}

/// What the prompt loop should do after a line has been handled
#[derive(Debug)]
pub enum Control {
    Continue,
    ShowTape,
    Failed(brainwalk::Error),
    Quit,
}

/// Apply one line of input: a meta-command, or more program text that runs
/// once the buffer is complete. The buffer is cleared after every run.
pub fn handle_line(runtime: &mut Runtime, buffer: &mut String, line: &str) -> Control {
    match line.trim() {
        "r" => {
            runtime.reset();
            Control::Continue
        }
        "d" => Control::ShowTape,
        "q" => Control::Quit,
        _ => {
            buffer.push_str(line);
            buffer.push('\n');
            if !is_complete(buffer) {
                return Control::Continue;
            }

            let result = brainwalk::run(runtime, buffer);
            buffer.clear();
            match result {
                Ok(()) => Control::Continue,
                Err(e) => Control::Failed(e),
            }
        }
    }
}

pub fn main(eof_policy: EofPolicy) -> io::Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut runtime = Runtime::new(Box::new(io::stdin()), Box::new(io::stdout()))
        .with_eof_policy(eof_policy)
        .with_interrupt_flag(interrupted.clone());

    let interface = Interface::new("brainwalk")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);

    let mut buffer = String::new();
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                // drop whatever was half typed, keep the tape
                buffer.clear();
                interface.write_fmt(format_args!("\n"))?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };

        if !matches!(line.trim(), "r" | "d" | "q") {
            interface.add_history_unique(line.clone());
        }

        // a Ctrl-C while idle shouldn't kill the next program
        interrupted.store(false, Ordering::SeqCst);
        match handle_line(&mut runtime, &mut buffer, &line) {
            Control::Continue => {}
            Control::ShowTape => interface.write_fmt(format_args!("{}\n", runtime.tape()))?,
            Control::Failed(e) => eprintln!("{0:}: {1:}", "Error".red(), e),
            Control::Quit => break,
        }
    }

    Ok(())
}
