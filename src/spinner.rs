//! The spinner itself: builder, lifecycle and the background redraw loop.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{cursor, execute};

use crate::{color, frames};

/// Supplies the delay before the next redraw. Called once per frame.
pub type IntervalFn = Box<dyn FnMut() -> Duration + Send + 'static>;

/// Supplies the color escape prefixed to the next frame. Called once per
/// redraw; an empty string draws in the terminal's current color.
pub type ColorFn = Box<dyn FnMut() -> String + Send + 'static>;

const DEFAULT_INTERVAL: Duration = Duration::from_millis(60);

/// Mutable spinner state shared between callers and the redraw thread.
struct Inner {
    frames: Vec<String>,
    index: usize,
    active: bool,
    writer: Box<dyn Write + Send>,
    interval: IntervalFn,
    color: ColorFn,
    hide_cursor: bool,
    worker: Option<Worker>,
}

/// Handle to a running redraw thread.
struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl Worker {
    /// Wakes the redraw thread and waits for it to exit. Must be called
    /// without the state lock held, or the join deadlocks against a
    /// mid-draw loop iteration.
    fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.join();
    }
}

/// An animated terminal spinner.
///
/// A spinner owns its frame set, its output writer and two providers: one
/// for the delay between redraws and one for the color prefix.
/// [`start`](Spinner::start) spawns a background thread that repaints the
/// current line in place; [`stop`](Spinner::stop) joins that thread, erases
/// the line and restores the cursor. Both take `&self` and are idempotent,
/// so a spinner can be shared across threads behind an `Arc` or plain
/// borrows.
///
/// ```no_run
/// use std::time::Duration;
/// use termspin::Spinner;
///
/// let spinner = Spinner::new();
/// spinner.start();
/// std::thread::sleep(Duration::from_secs(2));
/// spinner.stop();
/// ```
pub struct Spinner {
    inner: Arc<Mutex<Inner>>,
}

/// Configures and creates a [`Spinner`].
///
/// Every setter overwrites the previous value for its option, so when an
/// option is given twice the later call wins.
pub struct SpinnerBuilder {
    frames: Vec<String>,
    writer: Box<dyn Write + Send>,
    interval: IntervalFn,
    color: ColorFn,
    hide_cursor: bool,
}

impl Default for SpinnerBuilder {
    fn default() -> Self {
        Self {
            frames: frames::DOTS.iter().map(|s| s.to_string()).collect(),
            writer: Box::new(io::stderr()),
            interval: Box::new(|| DEFAULT_INTERVAL),
            color: Box::new(|| color::WHITE.to_string()),
            hide_cursor: true,
        }
    }
}

impl SpinnerBuilder {
    /// Replaces the frame set. Frames are drawn in order and wrap around.
    ///
    /// # Panics
    ///
    /// The redraw thread panics if the spinner is started with an empty
    /// frame set.
    pub fn frames(mut self, frames: &[&str]) -> Self {
        self.frames = frames.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Uses a fixed delay between redraws.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Box::new(move || interval);
        self
    }

    /// Uses a provider that is asked for the delay before every redraw,
    /// such as [`speedup_interval`](crate::interval::speedup_interval).
    pub fn interval_fn(mut self, provider: impl FnMut() -> Duration + Send + 'static) -> Self {
        self.interval = Box::new(provider);
        self
    }

    /// Sends output to `writer` instead of standard error.
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Prefixes every frame with a fixed color escape. An empty string
    /// draws the frames in the terminal's current color.
    pub fn color(mut self, escape: &str) -> Self {
        let escape = escape.to_string();
        self.color = Box::new(move || escape.clone());
        self
    }

    /// Uses a provider that is asked for the color prefix before every
    /// redraw, such as [`grey_pulse`](crate::color::grey_pulse).
    pub fn color_fn(mut self, provider: impl FnMut() -> String + Send + 'static) -> Self {
        self.color = Box::new(provider);
        self
    }

    /// Controls whether the cursor is hidden while the spinner runs.
    pub fn hide_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }

    /// Creates the spinner. Nothing is drawn until [`Spinner::start`].
    pub fn build(self) -> Spinner {
        Spinner {
            inner: Arc::new(Mutex::new(Inner {
                frames: self.frames,
                index: 0,
                active: false,
                writer: self.writer,
                interval: self.interval,
                color: self.color,
                hide_cursor: self.hide_cursor,
                worker: None,
            })),
        }
    }
}

impl Spinner {
    /// Creates a spinner with the default configuration: braille dots at
    /// sixty milliseconds per frame, drawn in white on standard error with
    /// the cursor hidden.
    pub fn new() -> Self {
        SpinnerBuilder::default().build()
    }

    /// Returns a builder for a customized spinner.
    pub fn builder() -> SpinnerBuilder {
        SpinnerBuilder::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic mid-draw leaves only cosmetic state behind, so a poisoned
        // lock is safe to keep using.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True between a `start` and the matching `stop`.
    pub fn is_active(&self) -> bool {
        self.lock().active
    }

    /// Begins animating: hides the cursor when configured to, then spawns
    /// the redraw thread. Calling `start` on a spinner that is already
    /// running does nothing.
    pub fn start(&self) {
        let mut inner = self.lock();
        if inner.active {
            return;
        }
        inner.active = true;
        if inner.hide_cursor {
            let _ = execute!(inner.writer, cursor::Hide);
        }
        let (stop_tx, stop_rx) = mpsc::channel();
        let shared = Arc::clone(&self.inner);
        let handle = thread::spawn(move || redraw_loop(&shared, &stop_rx));
        inner.worker = Some(Worker { stop_tx, handle });
        tracing::debug!("Spinner started");
    }

    /// Stops animating: waits for the redraw thread to exit, then erases
    /// the spinner line and restores the cursor. Calling `stop` on a
    /// spinner that is not running does nothing.
    pub fn stop(&self) {
        let worker = {
            let mut inner = self.lock();
            if !inner.active {
                return;
            }
            inner.active = false;
            inner.worker.take()
        };
        if let Some(worker) = worker {
            worker.stop();
        }
        // The thread is joined, so no redraw can land after the erase.
        let mut inner = self.lock();
        let _ = write!(inner.writer, "\r \r");
        if inner.hide_cursor {
            let _ = execute!(inner.writer, cursor::Show);
        }
        let _ = inner.writer.flush();
        tracing::debug!("Spinner stopped");
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Spinner {
    /// A dropped spinner stops itself, erasing its line and restoring the
    /// cursor.
    fn drop(&mut self) {
        self.stop();
    }
}

fn redraw_loop(shared: &Arc<Mutex<Inner>>, stop_rx: &Receiver<()>) {
    loop {
        let delay = {
            let mut inner = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if !inner.active {
                break;
            }
            let prefix = (inner.color)();
            let Inner {
                writer,
                frames,
                index,
                ..
            } = &mut *inner;
            let _ = write!(writer, "\r{}{}{}", prefix, frames[*index], color::RESET);
            let _ = writer.flush();
            *index = (*index + 1) % frames.len();
            (inner.interval)()
        };
        // The receiver doubles as the sleep: a stop signal cuts it short.
        match stop_rx.recv_timeout(delay) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::CaptureWriter;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn test_spinner_is_send_and_sync() {
        assert_send::<Spinner>();
        assert_sync::<Spinner>();
    }

    #[test]
    fn test_builder_defaults() {
        let spinner = Spinner::new();
        let mut inner = spinner.lock();
        assert_eq!(inner.frames, frames::DOTS);
        assert_eq!(inner.index, 0);
        assert!(!inner.active);
        assert!(inner.hide_cursor);
        assert!(inner.worker.is_none());
        assert_eq!((inner.interval)(), DEFAULT_INTERVAL);
        assert_eq!((inner.color)(), color::WHITE);
    }

    #[test]
    fn test_later_builder_calls_override_earlier_ones() {
        let spinner = Spinner::builder()
            .interval_fn(|| Duration::from_millis(5))
            .interval(Duration::from_millis(90))
            .color_fn(String::new)
            .color(color::RED)
            .build();
        let mut inner = spinner.lock();
        assert_eq!((inner.interval)(), Duration::from_millis(90));
        assert_eq!((inner.color)(), color::RED);
    }

    #[test]
    fn test_start_marks_active_and_stop_clears_it() {
        let spinner = Spinner::builder()
            .frames(&["·"])
            .interval(Duration::from_millis(5))
            .writer(CaptureWriter::new())
            .build();
        assert!(!spinner.is_active());

        spinner.start();
        assert!(spinner.is_active());
        spinner.start();
        assert!(spinner.is_active());

        spinner.stop();
        assert!(!spinner.is_active());
        spinner.stop();
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_stop_without_start_writes_nothing() {
        let sink = CaptureWriter::new();
        let spinner = Spinner::builder().writer(sink.clone()).build();
        spinner.stop();
        assert!(sink.is_empty());
        assert!(!spinner.is_active());
    }
}
