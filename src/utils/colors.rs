/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Non-productive time: none → green, up to an hour → yellow, more → red.
pub fn color_for_non_productive(secs: u64) -> &'static str {
    match secs {
        0 => GREEN,
        1..=3600 => YELLOW,
        _ => RED,
    }
}

/// Exceeded break is red whenever it is not zero.
pub fn color_for_exceeded_break(secs: u64) -> &'static str {
    if secs > 0 { RED } else { RESET }
}
