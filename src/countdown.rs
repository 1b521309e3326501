//! Countdown towards a fixed target moment.
//!
//! [`remaining_between`] is the whole computation: a millisecond difference
//! split into days, hours, minutes and seconds by truncating division. The
//! [`Countdown`] wrapper owns the 1 Hz refresh timer and the formatted text.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::constants::*;
use crate::schedule::Interval;

/// The instant the countdown measures against. Never mutated after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMoment(DateTime<Utc>);

impl TargetMoment {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> RemainingDuration {
        remaining_between(self.0, now)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemainingDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub expired: bool,
}

impl RemainingDuration {
    pub const EXPIRED: RemainingDuration = RemainingDuration {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        expired: true,
    };

    pub fn total_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Expired as soon as `now` is past `target`, even by less than a millisecond.
pub fn remaining_between(target: DateTime<Utc>, now: DateTime<Utc>) -> RemainingDuration {
    if now > target {
        return RemainingDuration::EXPIRED;
    }
    let delta = (target - now).num_milliseconds();

    RemainingDuration {
        days: delta / MS_PER_DAY,
        hours: (delta % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (delta % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (delta % MS_PER_MINUTE) / MS_PER_SECOND,
        expired: false,
    }
}

// --- Formatting ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Day => "Day",
            Unit::Hour => "Hour",
            Unit::Minute => "Minute",
            Unit::Second => "Second",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Unit::Day => "Days",
            Unit::Hour => "Hours",
            Unit::Minute => "Minutes",
            Unit::Second => "Seconds",
        }
    }
}

/// Singular only for exactly one; zero reads "0 Days".
pub fn label(value: i64, unit: Unit) -> &'static str {
    if value == 1 { unit.singular() } else { unit.plural() }
}

pub fn format_remaining(remaining: &RemainingDuration) -> String {
    format!(
        "{} {}, {} {}, {} {}, and {} {}",
        remaining.days,
        label(remaining.days, Unit::Day),
        remaining.hours,
        label(remaining.hours, Unit::Hour),
        remaining.minutes,
        label(remaining.minutes, Unit::Minute),
        remaining.seconds,
        label(remaining.seconds, Unit::Second),
    )
}

// --- Refresh ---
pub struct Countdown {
    target: TargetMoment,
    remaining: RemainingDuration,
    text: String,
    timer: Interval,
}

impl Countdown {
    pub fn new(target: TargetMoment, now: DateTime<Utc>) -> Self {
        let remaining = target.remaining_at(now);
        Self {
            target,
            remaining,
            text: format_remaining(&remaining),
            timer: Interval::fixed(COUNTDOWN_PERIOD),
        }
    }

    /// Feeds one frame of elapsed time. Returns true when the text changed.
    pub fn advance(&mut self, dt: f32, now: DateTime<Utc>) -> bool {
        if self.timer.advance(dt) == 0 {
            return false; // Not a second yet
        }

        let next = self.target.remaining_at(now);
        if next == self.remaining {
            return false;
        }
        if next.expired && !self.remaining.expired {
            info!(target_moment = %self.target.at(), "countdown reached its target");
        }

        self.remaining = next;
        self.text = format_remaining(&next);
        true
    }

    pub fn remaining(&self) -> RemainingDuration {
        self.remaining
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn headline(&self, event: &str) -> String {
        if self.remaining.expired {
            format!("{} has started", event)
        } else {
            format!("{} starts in", event)
        }
    }

    pub fn cancel(&mut self) {
        debug!("countdown timer cancelled");
        self.timer.cancel();
    }
}
