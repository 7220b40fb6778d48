//! Parsing of interactive play input.
//!
//! The play REPL reads one short command per line and translates it into
//! abstract engine events. Pile tokens: `s` stock, `w` waste (talon),
//! `t1`..`t7` tableau columns, `f1`..`f4` foundations.

use patience_engine::pile::PileId;

/// One parsed line of play input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    /// `d` - click the stock (draw, or recycle when it is empty)
    Draw,
    /// `m <src> <dst> [n]` - drag the n-th card from the top of `src`
    /// (default 1, the top) together with everything above it, drop on `dst`
    Move {
        src: PileId,
        dst: PileId,
        depth: usize,
    },
    /// `f <src>` - double-click the top of `src` (send to foundation)
    Send { src: PileId },
    /// `r` - restart with a fresh deal
    Restart,
    /// `v` - switch Classic/Vegas
    SwitchMode,
    /// `3` - toggle draw-three (Vegas only)
    ToggleDraw3,
    /// `c` - toggle cumulative scoring (Vegas only)
    ToggleCumulative,
    /// `win` - force the win screen
    ForceWin,
    /// `h` or `?` - print help
    Help,
    /// empty line - reprint the table
    Show,
}

/// Result of parsing a line of play input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Input(PlayInput),
    Quit,
    Invalid(String),
}

pub fn parse_pile(token: &str) -> Option<PileId> {
    match token {
        "s" => Some(PileId::Stock),
        "w" => Some(PileId::Talon),
        _ => {
            let mut chars = token.chars();
            let kind = chars.next()?;
            let idx: u8 = chars.as_str().parse().ok()?;
            match kind {
                't' if (1..=7).contains(&idx) => Some(PileId::Tableau(idx - 1)),
                'f' if (1..=4).contains(&idx) => Some(PileId::Foundation(idx - 1)),
                _ => None,
            }
        }
    }
}

pub fn parse_play_input(line: &str) -> ParseResult {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return ParseResult::Input(PlayInput::Show);
    };
    match head {
        "q" | "quit" => ParseResult::Quit,
        "d" => ParseResult::Input(PlayInput::Draw),
        "r" => ParseResult::Input(PlayInput::Restart),
        "v" => ParseResult::Input(PlayInput::SwitchMode),
        "3" => ParseResult::Input(PlayInput::ToggleDraw3),
        "c" => ParseResult::Input(PlayInput::ToggleCumulative),
        "win" => ParseResult::Input(PlayInput::ForceWin),
        "h" | "?" => ParseResult::Input(PlayInput::Help),
        "m" => {
            let (Some(src), Some(dst)) = (parts.next(), parts.next()) else {
                return ParseResult::Invalid("usage: m <src> <dst> [n]".into());
            };
            let Some(src) = parse_pile(src) else {
                return ParseResult::Invalid(format!("unknown pile: {}", src));
            };
            let Some(dst) = parse_pile(dst) else {
                return ParseResult::Invalid(format!("unknown pile: {}", dst));
            };
            let depth = match parts.next() {
                None => 1,
                Some(n) => match n.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => return ParseResult::Invalid(format!("bad card count: {}", n)),
                },
            };
            ParseResult::Input(PlayInput::Move { src, dst, depth })
        }
        "f" => {
            let Some(src) = parts.next() else {
                return ParseResult::Invalid("usage: f <src>".into());
            };
            match parse_pile(src) {
                Some(src) => ParseResult::Input(PlayInput::Send { src }),
                None => ParseResult::Invalid(format!("unknown pile: {}", src)),
            }
        }
        other => ParseResult::Invalid(format!(
            "unknown command: {} (h for help, q to quit)",
            other
        )),
    }
}
