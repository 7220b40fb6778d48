//! Deal command handler: deal one layout and print it.
//!
//! Supports optional seeding for deterministic dealing, so a layout can be
//! reproduced or shared.

use crate::error::CliError;
use crate::formatters::format_table;
use patience_engine::game::{GameMode, GameSession};
use std::io::Write;

/// Handle the deal command.
///
/// Deals a single layout under the requested rules and prints the stock,
/// waste, foundations, and the seven tableau columns.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `vegas` - Deal under Vegas rules instead of Classic
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(
    seed: Option<u64>,
    vegas: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mode = if vegas {
        GameMode::Vegas
    } else {
        GameMode::Classic
    };
    let session = GameSession::new(Some(base_seed), mode);
    writeln!(out, "deal: seed={} mode={}", base_seed, session.mode_label())?;
    write!(out, "{}", format_table(&session))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), false, &mut out);

        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("seed=42"), "Output should echo the seed");
        assert!(
            output.contains("Stock: [24]"),
            "A fresh deal leaves 24 stock cards"
        );
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), false, &mut out1).unwrap();
        handle_deal_command(Some(12345), false, &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_seeds_differ() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(1), false, &mut out1).unwrap();
        handle_deal_command(Some(2), false, &mut out2).unwrap();

        assert_ne!(out1, out2, "Different seeds should lay out differently");
    }

    #[test]
    fn test_deal_command_vegas_status() {
        let mut out = Vec::new();
        handle_deal_command(Some(9), true, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("mode=Vegas"));
        assert!(
            output.contains("$-52"),
            "Vegas deals start 52 in the hole"
        );
    }
}
