//! # Play Command
//!
//! Interactive solitaire in the terminal.
//!
//! The REPL acts as the rendering/input layer the engine expects: it
//! resolves short typed commands to card and pile identities, feeds the
//! session's abstract press/drag/release events, and re-renders the table
//! after every action. A synthetic clock (one tick per input line) drives
//! the engine's double-click pairing: the `f` shortcut issues two presses a
//! tenth of a tick apart.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_table;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_play_input, ParseResult, PlayInput};
use patience_engine::game::{GameMode, GameSession};
use patience_engine::input::{Command, Point, PressOutcome, ReleaseOutcome};
use patience_engine::logger::DealLogger;
use patience_engine::pile::PileId;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "commands:
  d              draw from the stock (recycles the waste when empty)
  m SRC DST [n]  move: grab the n-th card from the top of SRC (default 1)
                 with everything above it, drop on DST
  f SRC          send the top of SRC to a foundation (double-click)
  r              restart with a fresh deal
  v              switch Classic/Vegas
  3              toggle draw-three (Vegas)
  c              toggle cumulative scoring (Vegas)
  win            force the win
  q              quit
piles: s = stock, w = waste, t1..t7 = tableau, f1..f4 = foundations";

/// Handle the play command: interactive solitaire.
///
/// Explicit arguments win over the layered configuration; the configuration
/// fills in whatever the command line left unset.
///
/// # Arguments
///
/// * `seed` - RNG seed for a reproducible deal (default: config, then random)
/// * `vegas` - Start in Vegas mode
/// * `draw_three` - Start with draw-three (Vegas only)
/// * `cumulative` - Start with cumulative scoring (Vegas only)
/// * `log` - Append finished deals to this JSONL file
/// * `out` - Output stream for the table and prompts
/// * `err` - Error stream for warnings and rejected moves
/// * `stdin` - Input stream for player commands
pub fn handle_play_command(
    seed: Option<u64>,
    vegas: bool,
    draw_three: bool,
    cumulative: bool,
    log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_warning(err, &format!("ignoring configuration: {}", e))?;
            config::Config::default()
        }
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let vegas = vegas || cfg.vegas;
    let draw_three = draw_three || cfg.draw_three;
    let cumulative = cumulative || cfg.cumulative;
    let log = log.or_else(|| {
        cfg.log_dir.as_ref().map(|dir| {
            let name = format!("deals-{}.jsonl", chrono::Utc::now().format("%Y%m%d"));
            PathBuf::from(dir).join(name)
        })
    });

    let mode = if vegas {
        GameMode::Vegas
    } else {
        GameMode::Classic
    };
    let mut session = GameSession::new(Some(seed), mode);
    if draw_three {
        session.on_key(Command::ToggleDraw3);
    }
    if cumulative {
        session.on_key(Command::ToggleCumulative);
    }
    let mut logger = match &log {
        Some(path) => Some(DealLogger::create(path)?),
        None => None,
    };

    writeln!(out, "play: seed={} mode={}", seed, session.mode_label())?;
    write!(out, "{}", format_table(&session))?;

    let mut clock: f64 = 0.0;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        clock += 1.0;
        match parse_play_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
            }
            ParseResult::Input(PlayInput::Help) => {
                writeln!(out, "{}", HELP)?;
            }
            ParseResult::Input(input) => {
                apply_input(&mut session, &mut logger, input, clock, out, err)?;
                write!(out, "{}", format_table(&session))?;
            }
        }
    }

    log_deal(&mut logger, &session)?;
    writeln!(out, "goodbye")?;
    Ok(())
}

fn apply_input(
    session: &mut GameSession,
    logger: &mut Option<DealLogger>,
    input: PlayInput,
    clock: f64,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match input {
        PlayInput::Show => {}
        PlayInput::Help => {}
        PlayInput::Draw => {
            let stock_top = session
                .table()
                .pile(PileId::Stock)
                .top()
                .map(|c| c.id());
            match stock_top {
                Some(card) => {
                    session.on_card_pressed(card, Point::new(0.0, 0.0), clock)?;
                }
                None => {
                    if session.on_pile_pressed(PileId::Stock) == PressOutcome::Recycled {
                        writeln!(out, "waste recycled into the stock")?;
                    } else {
                        ui::write_error(err, "nothing to draw")?;
                    }
                }
            }
        }
        PlayInput::Move { src, dst, depth } => {
            let picked = {
                let pile = session.table().pile(src);
                if pile.len() < depth {
                    None
                } else {
                    Some(pile.cards()[pile.len() - depth].id())
                }
            };
            let Some(card) = picked else {
                ui::write_error(err, "no card there")?;
                return Ok(());
            };
            match session.on_card_pressed(card, Point::new(0.0, 0.0), clock)? {
                PressOutcome::Grabbed { .. } => match session.on_released(Some(dst))? {
                    ReleaseOutcome::Committed { cards, target } => {
                        writeln!(out, "moved {} card(s) to {}", cards.len(), target)?;
                    }
                    _ => {
                        ui::write_error(err, "illegal move, cards returned")?;
                    }
                },
                PressOutcome::Flipped { card } => {
                    writeln!(out, "flipped {}", card)?;
                }
                PressOutcome::Drew { .. } => {}
                _ => {
                    ui::write_error(err, "cannot move that card")?;
                }
            }
        }
        PlayInput::Send { src } => {
            let top = session.table().pile(src).top().map(|c| c.id());
            let Some(card) = top else {
                ui::write_error(err, "no card there")?;
                return Ok(());
            };
            let first = session.on_card_pressed(card, Point::new(0.0, 0.0), clock)?;
            if matches!(first, PressOutcome::Grabbed { .. }) {
                session.on_released(None)?;
            }
            match session.on_card_pressed(card, Point::new(0.0, 0.0), clock + 0.1)? {
                PressOutcome::SentToFoundation { card, target } => {
                    writeln!(out, "sent {} to {}", card, target)?;
                }
                PressOutcome::Grabbed { .. } => {
                    session.on_released(None)?;
                    ui::write_error(err, "no foundation accepts that card")?;
                }
                _ => {
                    ui::write_error(err, "cannot send that card")?;
                }
            }
        }
        PlayInput::Restart => {
            log_deal(logger, session)?;
            session.on_key(Command::Restart);
            writeln!(out, "new deal")?;
        }
        PlayInput::SwitchMode => {
            log_deal(logger, session)?;
            session.on_key(Command::SwitchMode);
            writeln!(out, "mode: {}", session.mode_label())?;
        }
        PlayInput::ToggleDraw3 => {
            session.on_key(Command::ToggleDraw3);
            writeln!(out, "stock: {}", session.draw_label())?;
        }
        PlayInput::ToggleCumulative => {
            session.on_key(Command::ToggleCumulative);
            writeln!(
                out,
                "cumulative scoring: {}",
                if session.cumulative_scoring() {
                    "on"
                } else {
                    "off"
                }
            )?;
        }
        PlayInput::ForceWin => {
            session.on_key(Command::ForceWin);
        }
    }
    Ok(())
}

fn log_deal(logger: &mut Option<DealLogger>, session: &GameSession) -> Result<(), CliError> {
    if let Some(logger) = logger {
        let id = logger.next_id();
        logger.write(&session.deal_record(id))?;
    }
    Ok(())
}
