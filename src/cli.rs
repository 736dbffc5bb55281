use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Terminal Spinner Demo
///
/// Animates a spinner preset on standard error until interrupted or until a
/// fixed duration has passed. The frame set, color and speed are all
/// configurable, and the animation can speed up over time or pulse through
/// the grey ramp.
///
/// Press Ctrl-C to stop: the spinner erases its line and restores the
/// cursor before the process exits.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Frame preset to animate. See --list-presets for every available name.
    #[arg(
        short = 'f',
        long = "frames",
        default_value = "dots",
        help_heading = "Animation"
    )]
    pub frames: String,

    /// Milliseconds between redraws at the start of the run.
    #[arg(
        short = 'i',
        long = "interval-ms",
        default_value_t = 60,
        help_heading = "Animation"
    )]
    pub interval_ms: u64,

    /// Ramp the redraw delay toward this many milliseconds.
    /// The ramp is linear and starts counting from the first frame.
    #[arg(long = "speedup-to-ms", help_heading = "Animation")]
    pub speedup_to_ms: Option<u64>,

    /// How many milliseconds the speed ramp takes to complete.
    /// Only meaningful together with --speedup-to-ms.
    #[arg(
        long = "speedup-over-ms",
        default_value_t = 5000,
        help_heading = "Animation"
    )]
    pub speedup_over_ms: u64,

    /// Draw the spinner in a fixed 256-color palette index (0-255).
    #[arg(short = 'c', long = "color", help_heading = "Color")]
    pub color: Option<u8>,

    /// Pulse through the grey ramp instead of using a fixed color,
    /// stepping to the next shade every given number of milliseconds.
    #[arg(
        long = "grey-pulse-ms",
        help_heading = "Color",
        conflicts_with = "color"
    )]
    pub grey_pulse_ms: Option<u64>,

    /// Stop automatically after this many seconds.
    /// Without it the spinner runs until Ctrl-C.
    #[arg(short = 'd', long = "duration-secs")]
    pub duration_secs: Option<u64>,

    /// Leave the cursor visible while the spinner runs.
    #[arg(long = "no-hide-cursor", help_heading = "Display Options")]
    pub no_hide_cursor: bool,

    /// List every frame preset with a short sample and exit
    #[arg(short = 'l', long = "list-presets", help_heading = "Info")]
    pub list_presets: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
