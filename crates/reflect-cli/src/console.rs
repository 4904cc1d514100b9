//! Terminal input for the session loop.
//!
//! stdin is read on a helper thread and handed over a channel, so each
//! prompt can wait on either the next line or Ctrl-C. Both Ctrl-C and end
//! of input become [`Input::Interrupted`], which the session treats as
//! "save and exit".

use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use reflect_core::session::{Input, InputSource};

#[cfg(unix)]
type Interrupt = tokio::signal::unix::Signal;
#[cfg(windows)]
type Interrupt = tokio::signal::windows::CtrlC;

#[cfg(unix)]
fn register_interrupt() -> io::Result<Interrupt> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn register_interrupt() -> io::Result<Interrupt> {
    tokio::signal::windows::ctrl_c()
}

/// [`InputSource`] backed by the process's stdin.
pub struct ConsoleInput {
    runtime: Runtime,
    lines: UnboundedReceiver<io::Result<String>>,
    interrupt: Interrupt,
}

impl ConsoleInput {
    /// Start the stdin reader and take over Ctrl-C handling.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start input runtime")?;

        let interrupt = {
            let _guard = runtime.enter();
            register_interrupt().context("failed to register Ctrl-C handler")?
        };

        let (tx, lines) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || read_lines(tx))
            .context("failed to spawn stdin reader")?;

        Ok(Self {
            runtime,
            lines,
            interrupt,
        })
    }
}

impl InputSource for ConsoleInput {
    fn next_input(&mut self) -> io::Result<Input> {
        let Self {
            runtime,
            lines,
            interrupt,
        } = self;

        runtime.block_on(async {
            tokio::select! {
                line = lines.recv() => match line {
                    Some(Ok(line)) => Ok(Input::Line(line)),
                    Some(Err(e)) => Err(e),
                    None => Ok(Input::Interrupted),
                },
                _ = interrupt.recv() => {
                    tracing::debug!("received Ctrl-C");
                    Ok(Input::Interrupted)
                }
            }
        })
    }
}

/// Forward stdin lines until end of input. Dropping `tx` closes the channel,
/// which the receiver reports as an interruption.
fn read_lines(tx: UnboundedSender<io::Result<String>>) {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    loop {
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                if tx.send(Ok(line)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(e));
                break;
            }
        }
    }
    tracing::debug!("stdin closed");
}
