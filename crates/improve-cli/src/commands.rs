use std::io::Write;

use improve_score::ScoreEngine;

use crate::config::{self, CliConfig, OutputFormat};
use crate::render::{self, RenderOptions};
use crate::session::Session;

pub fn list_catalog<W: Write>(mut output: W, format: OutputFormat) -> eyre::Result<()> {
    match format {
        OutputFormat::Text => write!(output, "{}", render::render_catalog())?,
        OutputFormat::Json => writeln!(
            output,
            "{}",
            serde_json::to_string_pretty(improve_score::catalog())?
        )?,
    }
    Ok(())
}

/// Mark each listed finding present, starting from the initial state, and
/// print the result. Repeated ids count once. Fails on the first unknown id.
pub fn score<W: Write>(
    mut output: W,
    present: &[String],
    options: RenderOptions,
) -> eyre::Result<()> {
    let mut engine = ScoreEngine::new();
    for id in present {
        let id = improve_score::parse_finding(id)?;
        if !engine.findings().is_present(id) {
            engine.toggle_finding(id);
        }
    }
    write!(output, "{}", render::render(&engine.assessment(), options)?)?;
    Ok(())
}

pub fn interactive(options: RenderOptions) -> eyre::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(options).run(stdin.lock(), stdout.lock())
}

pub fn config_show<W: Write>(mut output: W, config: &CliConfig) -> eyre::Result<()> {
    writeln!(output, "path: {}", config::config_path()?.display())?;
    writeln!(output, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}

pub fn config_init<W: Write>(mut output: W, config: &CliConfig) -> eyre::Result<()> {
    let path = config::save_config(config)?;
    writeln!(output, "wrote {}", path.display())?;
    Ok(())
}
