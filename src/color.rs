//! 256-color foreground escapes and time-based color effects.

use std::time::{Duration, Instant};

/// Resets all terminal text attributes.
pub const RESET: &str = "\x1b[0m";

// Foreground escapes for the sixteen standard xterm palette entries.
pub const BLACK: &str = "\x1b[38;5;0m";
pub const MAROON: &str = "\x1b[38;5;1m";
pub const GREEN: &str = "\x1b[38;5;2m";
pub const OLIVE: &str = "\x1b[38;5;3m";
pub const NAVY: &str = "\x1b[38;5;4m";
pub const PURPLE: &str = "\x1b[38;5;5m";
pub const TEAL: &str = "\x1b[38;5;6m";
pub const SILVER: &str = "\x1b[38;5;7m";
pub const GREY: &str = "\x1b[38;5;8m";
pub const RED: &str = "\x1b[38;5;9m";
pub const LIME: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const BLUE: &str = "\x1b[38;5;12m";
pub const FUCHSIA: &str = "\x1b[38;5;13m";
pub const AQUA: &str = "\x1b[38;5;14m";
pub const WHITE: &str = "\x1b[38;5;15m";

// Tail of the xterm grey ramp, dark grey up to near-white.
const GREY_RAMP_FIRST: i32 = 238;
const GREY_RAMP_LAST: i32 = 255;

/// Returns the 256-color foreground escape for palette index `n`.
///
/// Out-of-range indices yield an empty string, which leaves the terminal's
/// current color untouched instead of emitting a broken escape.
pub fn color256(n: i32) -> String {
    if !(0..=255).contains(&n) {
        return String::new();
    }
    format!("\x1b[38;5;{n}m")
}

/// Returns a color provider that bounces a palette index between `start` and
/// `end` inclusive, moving one step whenever `step` has elapsed since the
/// previous move. The sequence ping-pongs without doubling the endpoints:
/// `(10, 12)` produces 10, 11, 12, 11, 10, 11 and so on.
///
/// `start` must not exceed `end`.
pub fn color_pulse(start: i32, end: i32, step: Duration) -> impl FnMut() -> String + Send {
    let mut last_move = Instant::now();
    let mut direction = 1;
    let mut index = start;
    move || {
        if last_move.elapsed() >= step {
            last_move = Instant::now();
            if direction > 0 && index >= end {
                direction = -1;
            } else if direction < 0 && index <= start {
                direction = 1;
            }
            // The clamp only does work when start == end.
            index = (index + direction).max(start).min(end);
        }
        color256(index)
    }
}

/// Returns a [`color_pulse`] pinned to the grey ramp (palette indices
/// 238 through 255), giving a soft breathing effect on dark terminals.
pub fn grey_pulse(step: Duration) -> impl FnMut() -> String + Send {
    color_pulse(GREY_RAMP_FIRST, GREY_RAMP_LAST, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::thread::sleep;

    /// Extracts the palette index from a `\x1b[38;5;<n>m` escape.
    fn index_of(escape: &str) -> i32 {
        escape
            .strip_prefix("\x1b[38;5;")
            .and_then(|rest| rest.strip_suffix('m'))
            .and_then(|digits| digits.parse().ok())
            .unwrap_or_else(|| panic!("not a 256-color escape: {escape:?}"))
    }

    #[test]
    fn test_color256_formats_in_range_indices() {
        assert_eq!(color256(0), "\x1b[38;5;0m");
        assert_eq!(color256(15), "\x1b[38;5;15m");
        assert_eq!(color256(255), "\x1b[38;5;255m");
    }

    #[test]
    fn test_color256_degrades_to_empty_out_of_range() {
        assert_eq!(color256(-1), "");
        assert_eq!(color256(256), "");
        assert_eq!(color256(i32::MIN), "");
        assert_eq!(color256(i32::MAX), "");
    }

    #[test]
    fn test_named_escapes_match_their_palette_indices() {
        assert_eq!(BLACK, color256(0));
        assert_eq!(RED, color256(9));
        assert_eq!(YELLOW, color256(11));
        assert_eq!(WHITE, color256(15));
    }

    #[test]
    fn test_pulse_bounces_without_doubling_endpoints() {
        // A zero step advances on every call, so the first call already
        // moves off the pre-advance start value.
        let mut pulse = color_pulse(10, 12, Duration::ZERO);
        let seen: Vec<i32> = (0..8).map(|_| index_of(&pulse())).collect();
        assert_eq!(seen, vec![11, 12, 11, 10, 11, 12, 11, 10]);
    }

    #[test]
    fn test_pulse_holds_the_index_until_the_step_elapses() {
        let mut pulse = color_pulse(10, 12, Duration::from_secs(3600));
        for _ in 0..5 {
            assert_eq!(index_of(&pulse()), 10);
        }
    }

    #[test]
    fn test_pulse_single_entry_range_stays_pinned() {
        let mut pulse = color_pulse(7, 7, Duration::ZERO);
        for _ in 0..4 {
            assert_eq!(index_of(&pulse()), 7);
        }
    }

    #[test]
    #[serial]
    fn test_pulse_advances_when_calls_are_spaced_past_the_step() {
        let step = Duration::from_millis(25);
        let mut pulse = color_pulse(10, 12, step);
        let mut seen = vec![index_of(&pulse())];
        for _ in 0..4 {
            sleep(step + Duration::from_millis(10));
            seen.push(index_of(&pulse()));
        }
        assert_eq!(seen, vec![10, 11, 12, 11, 10]);
    }

    #[test]
    fn test_grey_pulse_stays_on_the_grey_ramp() {
        let mut pulse = grey_pulse(Duration::ZERO);
        for _ in 0..40 {
            let index = index_of(&pulse());
            assert!(
                (238..=255).contains(&index),
                "index {index} left the grey ramp"
            );
        }
    }
}
