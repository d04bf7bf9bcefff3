use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// A calendar month in the `YYYY-MM` form the calculation API speaks.
///
/// The month defines the inclusive date window `[first_day, last_day]` used
/// for contract signing and receipt collection attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) || !(1970..=9999).contains(&year) {
            return Err(EngineError::invalid_month(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Month a given date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // construction guarantees a valid year/month pair
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the month (inclusive window end).
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, '-');
        let (year_part, month_part) = match (parts.next(), parts.next()) {
            (Some(y), Some(m)) if y.len() == 4 && m.len() == 2 => (y, m),
            _ => return Err(EngineError::invalid_month(s)),
        };
        let year: i32 = year_part
            .parse()
            .map_err(|_| EngineError::invalid_month(s))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| EngineError::invalid_month(s))?;
        Month::new(year, month).map_err(|_| EngineError::invalid_month(s))
    }
}

impl TryFrom<String> for Month {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(m: Month) -> Self {
        m.to_string()
    }
}
