use chrono::{Local, NaiveDate};

/// Source of the current calendar date used for the today marker.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Server local time, date only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
