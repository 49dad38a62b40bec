//! Utilities for messing with time
//!
//! Types included allow messing with and mocking out clocks and other
//! side-effect-laden time operations. Time is tracked in milliseconds
//! because the persisted token records and the OAuth1 timestamps both
//! derive from millisecond precision.

use std::{ops, time::SystemTime};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unix time in milliseconds
///
/// Unix time as represented by the number of milliseconds elapsed since
/// the beginning of the Unix epoch on 1970/01/01 at 00:00:00 UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct UnixMillis(pub u64);

impl UnixMillis {
    /// The whole seconds portion of this timestamp
    #[inline]
    pub const fn as_secs(self) -> u64 {
        self.0 / 1000
    }
}

impl From<SystemTime> for UnixMillis {
    #[inline]
    fn from(t: SystemTime) -> Self {
        let time = t
            .duration_since(SystemTime::UNIX_EPOCH)
            .expect("times before Unix epoch are not expected")
            .as_millis() as u64;

        UnixMillis(time)
    }
}

impl ops::Add<u64> for UnixMillis {
    type Output = UnixMillis;

    #[inline]
    fn add(self, rhs: u64) -> Self::Output {
        UnixMillis(self.0 + rhs)
    }
}

impl ops::Sub<u64> for UnixMillis {
    type Output = UnixMillis;

    #[inline]
    fn sub(self, rhs: u64) -> Self::Output {
        UnixMillis(self.0.saturating_sub(rhs))
    }
}

impl Serialize for UnixMillis {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnixMillis {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = u64::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

/// Represents a clock, which can tell the current time
pub trait Clock: Send + Sync {
    /// Gets the current time according to this clock
    fn now(&self) -> UnixMillis;
}

/// The system clock as provided by `std::time::SystemTime`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct System;

impl Clock for System {
    #[inline]
    fn now(&self) -> UnixMillis {
        UnixMillis::from(SystemTime::now())
    }
}

/// A test clock which maintains the current time as internal state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestClock(UnixMillis);

impl Clock for TestClock {
    #[inline]
    fn now(&self) -> UnixMillis {
        self.0
    }
}

impl TestClock {
    /// Creates a new test clock with the specified time
    #[inline]
    pub const fn new(time: UnixMillis) -> Self {
        Self(time)
    }

    /// Updates the clock's current time to `val`
    pub fn set(&mut self, val: UnixMillis) {
        self.0 = val;
    }

    /// Increments the clock's current time by `inc` milliseconds
    pub fn inc(&mut self, inc: u64) {
        (self.0).0 += inc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_secs_truncates() {
        assert_eq!(UnixMillis(1_700_000_000_999).as_secs(), 1_700_000_000);
        assert_eq!(UnixMillis(999).as_secs(), 0);
    }

    #[test]
    fn sub_saturates_at_epoch() {
        assert_eq!(UnixMillis(3_000) - 5_000, UnixMillis(0));
    }

    #[test]
    fn test_clock_advances() {
        let mut clock = TestClock::new(UnixMillis(1_000));
        clock.inc(250);
        assert_eq!(clock.now(), UnixMillis(1_250));
        clock.set(UnixMillis(10));
        assert_eq!(clock.now(), UnixMillis(10));
    }
}
