//! Filter selections that drive a plot request.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inclusive range of survey weeks.
///
/// Not normalized: a range with `min > max` is sent as given and left for the
/// plot service to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRange {
    pub min: u32,
    pub max: u32,
}

impl WeekRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl From<(u32, u32)> for WeekRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekRangeParseError {
    #[error("week range {0:?} must look like MIN-MAX")]
    MissingSeparator(String),
    #[error("invalid week number {0:?}")]
    InvalidWeek(String),
}

impl FromStr for WeekRange {
    type Err = WeekRangeParseError;

    /// Parses `MIN-MAX`, e.g. `13-67`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| WeekRangeParseError::MissingSeparator(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| WeekRangeParseError::InvalidWeek(part.trim().to_string()))
        };
        Ok(WeekRange::new(parse(a)?, parse(b)?))
    }
}

/// Which week(s) a plot covers: one week (national) or a range (weekly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekSelector {
    Single(u32),
    Range(WeekRange),
}

impl fmt::Display for WeekSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekSelector::Single(w) => write!(f, "{}", w),
            WeekSelector::Range(r) => write!(f, "{}", r),
        }
    }
}

/// Current selections of one plot's controls, passed into the builder on
/// every build. Empty strings and empty lists count as "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub geography: Option<String>,
    pub metric: String,
    pub weeks: Option<WeekSelector>,
    pub races: Vec<String>,
}

impl FilterState {
    /// Selections of the weekly plot: geography, week range, any number of races.
    pub fn weekly(
        geography: &str,
        weeks: Option<WeekRange>,
        races: &[&str],
        metric: &str,
    ) -> Self {
        Self {
            geography: Some(geography.to_string()),
            metric: metric.to_string(),
            weeks: weeks.map(WeekSelector::Range),
            races: races.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Selections of the national plot: one week, at most one race.
    pub fn national(week: Option<u32>, race: Option<&str>, metric: &str) -> Self {
        Self {
            geography: None,
            metric: metric.to_string(),
            weeks: week.map(WeekSelector::Single),
            races: race.map(|r| vec![r.to_string()]).unwrap_or_default(),
        }
    }

    pub fn geography(&self) -> Option<&str> {
        self.geography.as_deref().filter(|g| !g.is_empty())
    }

    pub fn metric(&self) -> Option<&str> {
        Some(self.metric.as_str()).filter(|m| !m.is_empty())
    }

    /// Selected race codes joined with `,`; `None` when nothing is selected.
    /// Empty codes are skipped.
    pub fn race_list(&self) -> Option<String> {
        let codes: Vec<&str> = self
            .races
            .iter()
            .map(String::as_str)
            .filter(|r| !r.is_empty())
            .collect();
        if codes.is_empty() {
            None
        } else {
            Some(codes.join(","))
        }
    }
}
