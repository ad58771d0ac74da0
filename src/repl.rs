//! Line-oriented read-eval-print loop.
//!
//! Reads inputs one line at a time, hands them to a [`Session`], and writes
//! the results. Generic over the reader and writer so the loop can run
//! against stdin/stdout or in-memory buffers.

use std::str::FromStr;

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::app::{InputResult, Session};
use crate::error::{Result, TerminalError};
use crate::terminal::parse_input;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, as a visitor would see it.
    #[default]
    Text,
    /// One JSON object per input line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Settings for a REPL run.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt printed before each line. Empty disables the prompt.
    pub prompt: String,
    /// How results are written.
    pub output_format: OutputFormat,
    /// Print the classification of each input instead of running it.
    pub parse_only: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            output_format: OutputFormat::Text,
            parse_only: false,
        }
    }
}

/// Summary of a REPL run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplStats {
    /// Number of input lines processed.
    pub inputs: usize,
    /// Number of inputs that ended in a failure.
    pub failures: usize,
    /// Whether the run ended with /exit rather than end of input.
    pub exited: bool,
}

/// Drives a session from a stream of input lines.
pub struct Repl {
    session: Session,
    config: ReplConfig,
}

impl Repl {
    /// Creates a REPL over a session.
    pub fn new(session: Session, config: ReplConfig) -> Self {
        Self { session, config }
    }

    /// Runs until end of input or /exit.
    pub async fn run<R, W>(&self, mut reader: R, writer: &mut W) -> Result<ReplStats>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut stats = ReplStats::default();

        loop {
            self.write_prompt(writer).await?;
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = decode_line(&buf);
            if !self.step(&line, writer, &mut stats).await? {
                break;
            }
        }

        info!(
            inputs = stats.inputs,
            failures = stats.failures,
            "Input stream finished"
        );
        Ok(stats)
    }

    /// Runs a fixed list of inputs, stopping early on /exit.
    pub async fn run_inputs<W>(&self, inputs: &[String], writer: &mut W) -> Result<ReplStats>
    where
        W: AsyncWrite + Unpin,
    {
        let mut stats = ReplStats::default();
        for input in inputs {
            if !self.step(input, writer, &mut stats).await? {
                break;
            }
        }
        Ok(stats)
    }

    /// Processes one line. Returns false when the loop should stop.
    async fn step<W>(&self, line: &str, writer: &mut W, stats: &mut ReplStats) -> Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        stats.inputs += 1;

        if self.config.parse_only {
            let parsed = serde_json::to_string(&parse_input(line))
                .map_err(|e| TerminalError::internal(format!("Failed to encode input: {e}")))?;
            write_line(writer, &parsed).await?;
            return Ok(true);
        }

        let result = self.session.handle_input(line).await;
        debug!(?result, "Handled input");

        if matches!(result, InputResult::Failure(_)) {
            stats.failures += 1;
        }

        match self.config.output_format {
            OutputFormat::Text => match &result {
                InputResult::None | InputResult::Exit => {}
                InputResult::Output(text) => write_line(writer, text).await?,
                InputResult::Failure(text) => write_line(writer, &format!("Error: {text}")).await?,
            },
            OutputFormat::Json => {
                let record = json!({ "input": parse_input(line).raw(), "result": &result });
                write_line(writer, &record.to_string()).await?;
            }
        }

        if result == InputResult::Exit {
            stats.exited = true;
            return Ok(false);
        }
        Ok(true)
    }

    async fn write_prompt<W>(&self, writer: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if self.config.prompt.is_empty() {
            return Ok(());
        }
        writer.write_all(self.config.prompt.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}

/// Strips the line ending and decodes, replacing invalid UTF-8.
fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

async fn write_line<W>(writer: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
