use crate::commands::Outcome;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    /// Text mode prints only non-empty messages; JSON mode always prints the outcome.
    pub fn emit(&self, outcome: &Outcome) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => {
                if !outcome.message.is_empty() {
                    println!("{}", outcome.message);
                }
            }
            OutputMode::Json => {
                let payload = serde_json::to_string_pretty(outcome)?;
                println!("{payload}");
            }
        }

        Ok(())
    }
}
