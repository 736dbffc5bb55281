use crate::cli::Args;
use std::time::Duration;
use termspin::error::AppError;
use termspin::{Spinner, color, frames, grey_pulse, speedup_interval};

/// Prints every frame preset name with a short sample of its glyphs.
pub fn list_presets() {
    for (name, set) in frames::PRESETS {
        let sample: Vec<&str> = set.iter().take(6).copied().collect();
        println!("{name:<22} {}", sample.join(" "));
    }
}

/// Run the spinner demo flow.
///
/// - Resolves the preset and builds the spinner from the arguments
/// - Animates until Ctrl-C or until the requested duration has passed
/// - Stops the spinner, which erases the line and restores the cursor
pub async fn run(args: &Args) -> Result<(), AppError> {
    let Some(preset) = frames::by_name(&args.frames) else {
        return Err(AppError::config_error(format!(
            "Unknown preset '{}' (try --list-presets)",
            args.frames
        )));
    };

    let mut builder = Spinner::builder()
        .frames(preset)
        .interval(Duration::from_millis(args.interval_ms))
        .hide_cursor(!args.no_hide_cursor);

    if let Some(to_ms) = args.speedup_to_ms {
        builder = builder.interval_fn(speedup_interval(
            Duration::from_millis(args.interval_ms),
            Duration::from_millis(to_ms),
            Duration::from_millis(args.speedup_over_ms),
        ));
    }

    if let Some(step_ms) = args.grey_pulse_ms {
        builder = builder.color_fn(grey_pulse(Duration::from_millis(step_ms)));
    } else if let Some(index) = args.color {
        builder = builder.color(&color::color256(i32::from(index)));
    }

    let spinner = builder.build();
    tracing::info!(
        "Starting spinner: preset '{}', {}ms interval",
        args.frames,
        args.interval_ms
    );
    spinner.start();

    match args.duration_secs {
        Some(secs) => {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(secs)) => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted");
                }
            }
        }
        None => {
            tokio::signal::ctrl_c().await?;
            tracing::info!("Interrupted");
        }
    }

    spinner.stop();
    Ok(())
}
