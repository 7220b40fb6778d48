//! Cfg command handler: print the resolved configuration.

use crate::config::{self, ValueSource};
use crate::error::CliError;
use std::io::Write;

fn source_str(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default => "default",
        ValueSource::File => "file",
        ValueSource::Env => "env",
    }
}

/// Print every configuration value together with where it came from
/// (default, config file, or environment).
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let src = &resolved.sources;

    match cfg.seed {
        Some(seed) => writeln!(out, "seed = {} ({})", seed, source_str(src.seed))?,
        None => writeln!(out, "seed = random ({})", source_str(src.seed))?,
    }
    writeln!(out, "vegas = {} ({})", cfg.vegas, source_str(src.vegas))?;
    writeln!(
        out,
        "draw_three = {} ({})",
        cfg.draw_three,
        source_str(src.draw_three)
    )?;
    writeln!(
        out,
        "cumulative = {} ({})",
        cfg.cumulative,
        source_str(src.cumulative)
    )?;
    match &cfg.log_dir {
        Some(dir) => writeln!(out, "log_dir = {} ({})", dir, source_str(src.log_dir))?,
        None => writeln!(out, "log_dir = - ({})", source_str(src.log_dir))?,
    }
    Ok(())
}
