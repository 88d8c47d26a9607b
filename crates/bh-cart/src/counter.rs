//! "Satisfied customers" counter.
//!
//! The figure is an estimate, not data: a base offset plus an average per
//! day since opening. [`CounterPlan`] yields the values shown while the
//! number counts up.

use chrono::NaiveDate;

/// Whole days from `open` to `today`, never negative.
pub fn days_open(open: NaiveDate, today: NaiveDate) -> u64 {
    u64::try_from((today - open).num_days()).unwrap_or(0)
}

pub fn target_customers(open: NaiveDate, today: NaiveDate, base: u64, per_day: u64) -> u64 {
    base.saturating_add(days_open(open, today).saturating_mul(per_day))
}

/// Count-up animation from 0 to `target` in roughly `steps` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterPlan {
    target: u64,
    increment: u64,
    current: u64,
    done: bool,
}

impl CounterPlan {
    pub fn new(target: u64, steps: u64) -> Self {
        Self {
            target,
            increment: (target / steps.max(1)).max(1),
            current: 0,
            done: false,
        }
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CounterPlan {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.increment);
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current)
    }
}

impl std::iter::FusedIterator for CounterPlan {}
