use std::io::{BufRead, Write};

use improve_score::{FindingId, ScoreEngine, ScoreError};

use crate::config::OutputFormat;
use crate::render::{self, RenderOptions};

pub const HELP: &str = "\
Commands:
  1-7 or <finding id>   toggle a finding
  show                  redraw the current view
  json                  print the current assessment as JSON
  reset                 clear every finding
  help                  show this message
  quit                  leave
";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle by stable id. Unchecked until it reaches the engine.
    Toggle(String),
    Show,
    Json,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`. Catalog indexes map to their
    /// finding id; any other word is taken as a finding id.
    pub fn parse(line: &str) -> Option<Command> {
        let word = line.trim();
        if word.is_empty() {
            return None;
        }
        let command = match word {
            "show" => Command::Show,
            "json" => Command::Json,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(index) if (1..=FindingId::ALL.len()).contains(&index) => {
                    Command::Toggle(FindingId::ALL[index - 1].as_str().to_string())
                }
                _ => Command::Toggle(other.to_string()),
            },
        };
        Some(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Interactive scoring session over a single engine. Every command runs
/// to completion before the next line is read.
pub struct Session {
    engine: ScoreEngine,
    options: RenderOptions,
}

impl Session {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            engine: ScoreEngine::new(),
            options,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// The full view in the configured format.
    pub fn view(&self) -> eyre::Result<String> {
        render::render(&self.engine.assessment(), self.options)
    }

    pub fn apply(&mut self, command: Command) -> eyre::Result<Outcome> {
        let text = match command {
            Command::Toggle(id) => match self.engine.toggle(&id).map(|_| ()) {
                Ok(()) => self.view()?,
                Err(ScoreError::InvalidFindingId(id)) => {
                    format!("unknown finding '{id}' (type `help` for commands)\n")
                }
            },
            Command::Show => self.view()?,
            Command::Json => render::render_json(&self.engine.assessment())?,
            Command::Reset => {
                self.engine.reset();
                self.view()?
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Print(text))
    }

    /// Drive the session from `input` until it ends or `quit` is read.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> eyre::Result<()> {
        write!(output, "{}", self.view()?)?;
        if self.options.format == OutputFormat::Text {
            write!(output, "\n{HELP}")?;
        }

        for line in input.lines() {
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            tracing::debug!(?command, "session command");
            match self.apply(command)? {
                Outcome::Print(text) => {
                    write!(output, "{text}")?;
                    output.flush()?;
                }
                Outcome::Quit => break,
            }
        }
        Ok(())
    }
}
