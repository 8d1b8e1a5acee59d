use std::mem::MaybeUninit;
use std::ops::{Add, Sub};
use std::time::Duration;

use libc::{CLOCK_MONOTONIC, EFAULT, EINVAL, timespec};

use crate::util::panic::{BadStackAddrPanic, Panic, UnexpectedErrorPanic, UnsupportedClockPanic};
use crate::util::syscall::err_no;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A point on the system's monotonic clock, which never jumps backwards and isn't affected by
/// changes to the wall-clock time.
///
/// Instants are only meaningful relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    // Always normalized so that 0 <= nanos < NANOS_PER_SEC.
    secs: i64,
    nanos: i64,
}

impl Instant {
    /// Reads the current time from `CLOCK_MONOTONIC`.
    #[allow(clippy::unnecessary_cast)]
    pub fn now() -> Instant {
        let mut raw: MaybeUninit<timespec> = MaybeUninit::uninit();
        // SAFETY: raw is a valid pointer to a timespec, which clock_gettime initializes on success.
        if unsafe { libc::clock_gettime(CLOCK_MONOTONIC, raw.as_mut_ptr()) } == -1 {
            match err_no() {
                EFAULT => BadStackAddrPanic.panic(),
                EINVAL => UnsupportedClockPanic.panic(),
                e =>      UnexpectedErrorPanic(e).panic(),
            }
        }
        // SAFETY: clock_gettime either initializes raw or returns an error and diverges.
        let raw = unsafe { raw.assume_init() };

        Instant {
            secs: raw.tv_sec as i64,
            nanos: raw.tv_nsec as i64,
        }
    }

    /// Returns the time elapsed from `earlier` to `self`, or zero if `earlier` is later than
    /// `self`.
    pub fn duration_since(&self, earlier: Instant) -> Duration {
        if *self <= earlier {
            return Duration::ZERO;
        }

        let mut secs = self.secs - earlier.secs;
        let mut nanos = self.nanos - earlier.nanos;
        if nanos < 0 {
            secs -= 1;
            nanos += NANOS_PER_SEC;
        }
        // Both are non-negative after the comparison above.
        Duration::new(secs as u64, nanos as u32)
    }

    /// Returns the time elapsed since `self`.
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(*self)
    }

    /// Returns the instant `duration` after `self`, or `None` if it can't be represented.
    pub fn checked_add(&self, duration: Duration) -> Option<Instant> {
        let secs = i64::try_from(duration.as_secs()).ok()?;
        let mut secs = self.secs.checked_add(secs)?;
        let mut nanos = self.nanos + i64::from(duration.subsec_nanos());
        if nanos >= NANOS_PER_SEC {
            secs = secs.checked_add(1)?;
            nanos -= NANOS_PER_SEC;
        }
        Some(Instant { secs, nanos })
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    /// # Panics
    /// Panics if the result overflows. See [`Instant::checked_add`] for a non-panicking version.
    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|| panic!("overflow when adding duration to instant"))
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Self::Output {
        self.duration_since(rhs)
    }
}
