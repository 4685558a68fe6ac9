//! The interactive loop: pick an engine, type a prompt, print the reply.
//!
//! Input and output are injected so the loop can be driven from tests with
//! in-memory buffers instead of the terminal.

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::warn;

use crate::consts::EXIT_SENTINEL;
use crate::registry::EngineRegistry;

pub struct Repl<'a> {
    registry: &'a EngineRegistry,
}

impl<'a> Repl<'a> {
    pub fn new(registry: &'a EngineRegistry) -> Self {
        Self { registry }
    }

    /// Run until the exit sentinel or end of input. Dispatch failures are
    /// reported inline and never end the loop; only I/O errors do.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let key_prompt = format!("Enter engine ({}): ", self.registry.names().join(" / "));

        loop {
            let Some(line) = read_line(&mut lines, out, &key_prompt).await? else {
                writeln!(out)?;
                break;
            };
            let key = line.trim().to_lowercase();

            if key.is_empty() {
                continue;
            }
            if is_exit(&key) {
                break;
            }

            let Some(prompt) = read_line(&mut lines, out, "Enter your prompt: ").await? else {
                writeln!(out)?;
                break;
            };

            match self.registry.dispatch(&key, prompt.trim()).await {
                Ok(response) => {
                    writeln!(out, "Response:\n{}\n", response)?;
                }
                Err(e) => {
                    warn!(engine = %key, error = %e, "dispatch failed");
                    writeln!(out, "error: {}\n", e)?;
                }
            }
        }

        writeln!(out, "Goodbye!")?;
        out.flush()?;
        Ok(())
    }
}

/// True when `input` is the exit sentinel, ignoring case and surrounding
/// whitespace.
pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

async fn read_line<R, W>(lines: &mut Lines<R>, out: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(lines.next_line().await?)
}
