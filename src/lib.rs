//! Terminal Spinner Library
//!
//! This library animates a single-line spinner on a terminal. Frames, colors
//! and the delay between redraws are all swappable, and the color and
//! interval can be driven by closures for effects such as grey pulsing or a
//! speed ramp.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use termspin::{Spinner, frames, grey_pulse, speedup_interval};
//!
//! // A default spinner: braille dots, white, 60ms per frame, on stderr.
//! let spinner = Spinner::new();
//! spinner.start();
//! std::thread::sleep(Duration::from_secs(1));
//! spinner.stop();
//!
//! // A customized one: moon phases that speed up over five seconds while
//! // pulsing through the grey ramp.
//! let spinner = Spinner::builder()
//!     .frames(frames::MOON)
//!     .interval_fn(speedup_interval(
//!         Duration::from_millis(120),
//!         Duration::from_millis(40),
//!         Duration::from_secs(5),
//!     ))
//!     .color_fn(grey_pulse(Duration::from_millis(80)))
//!     .build();
//! spinner.start();
//! std::thread::sleep(Duration::from_secs(6));
//! spinner.stop();
//! ```

pub mod color;
pub mod error;
pub mod frames;
pub mod interval;
pub mod spinner;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use color::{color256, color_pulse, grey_pulse};
pub use error::AppError;
pub use interval::speedup_interval;
pub use spinner::{ColorFn, IntervalFn, Spinner, SpinnerBuilder};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
