//! Plot request URLs.
//!
//! Joins a base endpoint (`/weekly` or `/national`) with the encoded filter
//! selections. Building is pure: the same inputs always give the same URL, and
//! unknown codes or out-of-range weeks are passed through for the plot service
//! to judge.
//!
//! # Examples
//!
//! - weekly(`US`, 13–67, no races, `food_insufficient`) →
//!   `.../weekly?week_min=13&week_max=67&geography=US&metric=food_insufficient`
//! - national(63, `black`, `food_insufficient`) →
//!   `.../national?week=63&race=black&metric=food_insufficient`

mod filter;
pub mod query;

pub use filter::{FilterState, WeekRange, WeekRangeParseError, WeekSelector};
pub use query::{encode_filter, QueryParams};

use std::fmt;
use thiserror::Error;
use url::Url;

/// Host of the deployed plot service.
pub const DEFAULT_BASE_URL: &str = "https://pulse-analysis-production.up.railway.app";

/// Plot kinds served by the plot service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotEndpoint {
    /// Metric over a range of weeks for one geography, optionally split by race.
    Weekly,
    /// National snapshot for a single week and race.
    National,
}

impl PlotEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            PlotEndpoint::Weekly => "weekly",
            PlotEndpoint::National => "national",
        }
    }
}

impl fmt::Display for PlotEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Error)]
pub enum PlotUrlError {
    #[error("invalid base URL {url:?}")]
    InvalidBase {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL {0} cannot carry a path")]
    CannotBeABase(String),
}

/// Builds plot request URLs against one base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotUrlBuilder {
    base: Url,
}

impl PlotUrlBuilder {
    /// Query and fragment of `base` are dropped; its path is treated as a
    /// directory so `https://host/api` yields `https://host/api/weekly`.
    pub fn new(mut base: Url) -> Result<Self, PlotUrlError> {
        if base.cannot_be_a_base() {
            return Err(PlotUrlError::CannotBeABase(base.to_string()));
        }
        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        Ok(Self { base })
    }

    pub fn parse(base: &str) -> Result<Self, PlotUrlError> {
        let url = Url::parse(base).map_err(|source| PlotUrlError::InvalidBase {
            url: base.to_string(),
            source,
        })?;
        Self::new(url)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Builds the URL for `endpoint` from the current selections.
    pub fn build(&self, endpoint: PlotEndpoint, filter: &FilterState) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}{}", self.base.path(), endpoint.path());
        url.set_path(&path);
        url.set_query(encode_filter(filter).encode().as_deref());
        url
    }

    pub fn weekly(
        &self,
        geography: &str,
        weeks: Option<WeekRange>,
        races: &[&str],
        metric: &str,
    ) -> Url {
        self.build(
            PlotEndpoint::Weekly,
            &FilterState::weekly(geography, weeks, races, metric),
        )
    }

    pub fn national(&self, week: Option<u32>, race: Option<&str>, metric: &str) -> Url {
        self.build(
            PlotEndpoint::National,
            &FilterState::national(week, race, metric),
        )
    }
}

impl Default for PlotUrlBuilder {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL");
        Self { base }
    }
}

/// Weekly plot URL against the deployed service.
pub fn build_weekly_plot_url(
    geography: &str,
    weeks: Option<WeekRange>,
    races: &[&str],
    metric: &str,
) -> String {
    PlotUrlBuilder::default()
        .weekly(geography, weeks, races, metric)
        .into()
}

/// National plot URL against the deployed service. An empty `metric` is
/// omitted, the same as every other empty selector.
pub fn build_national_plot_url(week: Option<u32>, race: Option<&str>, metric: &str) -> String {
    PlotUrlBuilder::default().national(week, race, metric).into()
}
