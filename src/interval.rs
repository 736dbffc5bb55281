//! Time-based frame interval providers.

use std::time::{Duration, Instant};

/// Returns an interval provider that ramps the frame delay linearly from
/// `start` to `end` over `ramp`.
///
/// The ramp is anchored at the provider's first call rather than at
/// construction, so a spinner configured long before `Spinner::start` still
/// ramps from the moment it begins drawing. The first call therefore returns
/// exactly `start`. Once `ramp` has fully elapsed the provider returns `end`
/// forever, and a zero `ramp` returns `end` from the first call on. With
/// `end` larger than `start` the same provider slows the animation down
/// instead.
pub fn speedup_interval(
    start: Duration,
    end: Duration,
    ramp: Duration,
) -> impl FnMut() -> Duration + Send {
    let mut first_call: Option<Instant> = None;
    move || {
        let now = Instant::now();
        let anchor = *first_call.get_or_insert(now);
        // Whole microseconds; sub-microsecond jitter never moves the delay.
        let elapsed = now.duration_since(anchor).as_micros();
        let window = ramp.as_micros();
        if elapsed >= window {
            return end;
        }
        let progress = elapsed as f64 / window as f64;
        let nanos = start.as_nanos() as f64 * (1.0 - progress) + end.as_nanos() as f64 * progress;
        Duration::from_nanos(nanos as u64)
    }
}
