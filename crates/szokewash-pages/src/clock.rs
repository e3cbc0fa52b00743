//! Source of "today" for date limits

use chrono::{Local, NaiveDate};

/// Supplies the current calendar day.
pub trait Clock {
	fn today(&self) -> NaiveDate;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn today(&self) -> NaiveDate {
		Local::now().date_naive()
	}
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}
