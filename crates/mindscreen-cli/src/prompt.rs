use std::io::{self, BufRead, Write};

use mindscreen_core::Symptom;
use mindscreen_engine::{AnswerProvider, EngineError};

/// Parse a yes/no reply. Case-insensitive, surrounding whitespace ignored.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Line-oriented yes/no prompter over any reader and writer.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until the reply parses. `None` if input ends first.
    pub fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        loop {
            write!(self.output, "{question} (yes/no): ")?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            // Bytes that are not UTF-8 are just another unrecognised reply.
            let line = String::from_utf8_lossy(&raw);
            match parse_answer(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => {
                    tracing::debug!(input = line.trim(), "rejected answer");
                    writeln!(self.output, "  Please answer 'yes' or 'no' (y/n).")?;
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> AnswerProvider for ConsolePrompter<R, W> {
    fn ask(&mut self, symptom: Symptom) -> Result<bool, EngineError> {
        let question = format!("  Do you experience {}?", symptom.label().to_lowercase());
        self.confirm(&question)?
            .ok_or(EngineError::InputClosed(symptom))
    }
}
