//! Parameter encoder: filter selections to an ordered query string.

use super::filter::{FilterState, WeekSelector};
use url::form_urlencoded;

pub const WEEK: &str = "week";
pub const WEEK_MIN: &str = "week_min";
pub const WEEK_MAX: &str = "week_max";
pub const RACE: &str = "race";
pub const GEOGRAPHY: &str = "geography";
pub const METRIC: &str = "metric";

/// Ordered query parameters. Insertion order is serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Pushes `value` only when it is present and non-empty.
    pub fn push_present(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `application/x-www-form-urlencoded` string, or `None` with no parameters.
    pub fn encode(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        Some(ser.finish())
    }
}

/// Encodes a filter as `week | week_min,week_max`, `race`, `geography`, `metric`,
/// skipping any selector that is absent or empty.
pub fn encode_filter(filter: &FilterState) -> QueryParams {
    let mut params = QueryParams::new();

    match filter.weeks {
        Some(WeekSelector::Single(week)) => params.push(WEEK, week.to_string()),
        Some(WeekSelector::Range(range)) => {
            params.push(WEEK_MIN, range.min.to_string());
            params.push(WEEK_MAX, range.max.to_string());
        }
        None => {}
    }
    params.push_present(RACE, filter.race_list().as_deref());
    params.push_present(GEOGRAPHY, filter.geography());
    params.push_present(METRIC, filter.metric());

    params
}
