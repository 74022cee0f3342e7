//! Simulated playback cursor driven by wall-clock time.
//!
//! The host is expected to call [`PlaybackController::tick`] at roughly
//! [`TICK_INTERVAL`]; each tick recomputes the cursor from the instant
//! playback started rather than accumulating per-tick deltas, so a late or
//! missed tick never drifts the cursor. Ticks in non-playing states mutate
//! nothing, which makes cancellation deterministic.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

/// Nominal tick rate for the playback timer (~30 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Monotonic time source, injectable for tests.
pub trait Clock {
    /// Time elapsed since the clock's epoch.
    fn now(&self) -> Duration;
}

/// Real host clock backed by [`Instant`].
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Manually advanced clock for tests and headless runs.
///
/// Clones share the same underlying time, so a copy can be advanced from
/// outside while the controller holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Playback state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Wall-clock-driven cursor simulation.
pub struct PlaybackController {
    state: PlaybackState,
    /// Cursor position in seconds, within `[0, max_duration]`.
    cursor: f64,
    max_duration: f64,
    /// Clock instant and cursor value when playback last (re)started.
    origin: Option<(Duration, f64)>,
    clock: Box<dyn Clock>,
}

impl PlaybackController {
    pub fn new(max_duration: f64, clock: Box<dyn Clock>) -> Self {
        Self {
            state: PlaybackState::Stopped,
            cursor: 0.0,
            max_duration,
            origin: None,
            clock,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current cursor position in seconds.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Total displayable span; updated when the host loads a new timeline.
    pub fn set_max_duration(&mut self, max_duration: f64) {
        self.max_duration = max_duration;
    }

    /// Start playing from the current cursor. No-op if already playing.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Playing {
            return;
        }
        debug!(cursor = self.cursor, "playback started");
        self.origin = Some((self.clock.now(), self.cursor));
        self.state = PlaybackState::Playing;
    }

    /// Stop the timer, keep the cursor where it is.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        debug!(cursor = self.cursor, "playback paused");
        self.origin = None;
        self.state = PlaybackState::Paused;
    }

    /// Stop the timer and reset the cursor to 0.
    pub fn stop(&mut self) {
        debug!("playback stopped");
        self.origin = None;
        self.cursor = 0.0;
        self.state = PlaybackState::Stopped;
    }

    /// Manual seek; clamps to the displayable span. Allowed in any state.
    pub fn set_current_time(&mut self, seconds: f64) {
        self.cursor = seconds.clamp(0.0, self.max_duration);
        // Rebase a running playback so the next tick continues from here.
        if self.state == PlaybackState::Playing {
            self.origin = Some((self.clock.now(), self.cursor));
        }
    }

    /// Recompute the cursor from elapsed wall-clock time.
    ///
    /// Reaching the end of the span clamps the cursor there and stops.
    pub fn tick(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let Some((started, initial_cursor)) = self.origin else {
            return;
        };
        let elapsed = (self.clock.now() - started).as_secs_f64();
        let cursor = initial_cursor + elapsed;
        if cursor >= self.max_duration {
            self.cursor = self.max_duration;
            self.origin = None;
            self.state = PlaybackState::Stopped;
            debug!("playback reached end of span");
        } else {
            self.cursor = cursor;
        }
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("max_duration", &self.max_duration)
            .finish()
    }
}
