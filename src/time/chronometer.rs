use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use derive_more::IsVariant;

use super::{AlreadyRunningError, Instant, NotRunningError};

/// A stopwatch which accumulates the time spent between each `start` and the following `stop`.
///
/// A Chronometer is either idle or running. Time only accumulates while it is running, and the
/// accumulated total survives being stopped and started again until [`reset`](Self::reset) is
/// called.
///
/// ```
/// use pitaya::time::Chronometer;
///
/// let mut chronometer = Chronometer::new();
/// chronometer.start()?;
/// // ...
/// chronometer.stop()?;
/// println!("took {chronometer}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Chronometer {
    pub(crate) state: ChronometerState,
    pub(crate) accumulated: Duration,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ChronometerState {
    #[default]
    Idle,
    Running(Instant),
}

use ChronometerState::*;

impl Chronometer {
    /// Creates a new idle Chronometer with no elapsed time.
    pub const fn new() -> Chronometer {
        Chronometer {
            state: Idle,
            accumulated: Duration::ZERO,
        }
    }

    /// Returns true if the Chronometer is currently measuring time.
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Starts measuring time.
    ///
    /// # Errors
    /// Returns [`AlreadyRunningError`] if the Chronometer is already running.
    pub fn start(&mut self) -> Result<&mut Chronometer, AlreadyRunningError> {
        match self.state {
            Running(_) => Err(AlreadyRunningError)?,
            Idle => self.state = Running(Instant::now()),
        }
        tracing::trace!(accumulated = ?self.accumulated, "chronometer started");
        Ok(self)
    }

    /// Stops measuring time, adding the time since the last start to the total.
    ///
    /// # Errors
    /// Returns [`NotRunningError`] if the Chronometer is idle.
    pub fn stop(&mut self) -> Result<&mut Chronometer, NotRunningError> {
        match self.state {
            Idle => Err(NotRunningError)?,
            Running(started) => {
                self.accumulated += started.elapsed();
                self.state = Idle;
            },
        }
        tracing::trace!(accumulated = ?self.accumulated, "chronometer stopped");
        Ok(self)
    }

    /// Discards all elapsed time. If the Chronometer is running, it keeps running, measuring from
    /// the time of the reset.
    pub fn reset(&mut self) -> &mut Chronometer {
        self.accumulated = Duration::ZERO;
        if self.state.is_running() {
            self.state = Running(Instant::now());
        }
        tracing::trace!(running = self.is_running(), "chronometer reset");
        self
    }

    /// Returns the total elapsed time, including the current run if the Chronometer is running.
    pub fn elapsed(&self) -> Duration {
        match self.state {
            Idle => self.accumulated,
            Running(started) => self.accumulated + started.elapsed(),
        }
    }

    /// Returns the total elapsed time in whole milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }
}

impl Display for Chronometer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.elapsed_millis() {
            millis @ (0 | 1) => write!(f, "{millis} millisecond"),
            millis => write!(f, "{millis} milliseconds"),
        }
    }
}
