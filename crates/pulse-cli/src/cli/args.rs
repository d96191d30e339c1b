//! Plot selection flags shared by `url` and `fetch`.

use clap::{Args, Subcommand};
use pulse_core::catalog::{self, WEEK_NUM_MAX, WEEK_NUM_MIN};
use pulse_core::plot_url::{FilterState, PlotEndpoint, WeekRange, WeekSelector};

#[derive(Debug, Clone, Subcommand)]
pub enum PlotArgs {
    /// Metric over a range of weeks for one geography.
    Weekly(WeeklyArgs),
    /// National snapshot for one week.
    National(NationalArgs),
}

#[derive(Debug, Clone, Args)]
pub struct WeeklyArgs {
    /// Geography code, e.g. US or WA. An empty value omits it.
    #[arg(long)]
    pub geography: Option<String>,

    /// Week range, e.g. 13-67.
    #[arg(long, value_name = "MIN-MAX")]
    pub weeks: Option<WeekRange>,

    /// Race/ethnicity code; repeat or comma-separate for several.
    #[arg(long = "race", value_name = "CODE", value_delimiter = ',')]
    pub races: Vec<String>,

    /// Metric code, e.g. food_insufficient. An empty value omits it.
    #[arg(long)]
    pub metric: Option<String>,

    /// Start from an empty selection instead of the panel defaults.
    #[arg(long)]
    pub no_defaults: bool,
}

#[derive(Debug, Clone, Args)]
pub struct NationalArgs {
    /// Survey week.
    #[arg(long)]
    pub week: Option<u32>,

    /// Race/ethnicity code. An empty value omits it.
    #[arg(long)]
    pub race: Option<String>,

    /// Metric code. An empty value omits it.
    #[arg(long)]
    pub metric: Option<String>,

    /// Start from an empty selection instead of the panel defaults.
    #[arg(long)]
    pub no_defaults: bool,
}

impl WeeklyArgs {
    pub fn filter(&self) -> FilterState {
        let (geography, metric, weeks) = if self.no_defaults {
            (String::new(), String::new(), None)
        } else {
            (
                catalog::DEFAULT_GEOGRAPHY.to_string(),
                catalog::DEFAULT_METRIC.to_string(),
                Some(WeekRange::new(WEEK_NUM_MIN, WEEK_NUM_MAX)),
            )
        };
        FilterState {
            geography: Some(self.geography.clone().unwrap_or(geography)),
            metric: self.metric.clone().unwrap_or(metric),
            weeks: self.weeks.or(weeks).map(WeekSelector::Range),
            races: self.races.clone(),
        }
    }
}

impl NationalArgs {
    pub fn filter(&self) -> FilterState {
        let (week, race, metric) = if self.no_defaults {
            (None, String::new(), String::new())
        } else {
            (
                Some(WEEK_NUM_MAX),
                catalog::DEFAULT_NATIONAL_RACE.to_string(),
                catalog::DEFAULT_METRIC.to_string(),
            )
        };
        let race = self.race.clone().unwrap_or(race);
        let metric = self.metric.clone().unwrap_or(metric);
        FilterState::national(self.week.or(week), Some(race.as_str()), &metric)
    }
}

impl PlotArgs {
    pub fn endpoint(&self) -> PlotEndpoint {
        match self {
            PlotArgs::Weekly(_) => PlotEndpoint::Weekly,
            PlotArgs::National(_) => PlotEndpoint::National,
        }
    }

    pub fn filter(&self) -> FilterState {
        let filter = match self {
            PlotArgs::Weekly(a) => a.filter(),
            PlotArgs::National(a) => a.filter(),
        };
        warn_unknown_codes(&filter);
        filter
    }
}

/// Unknown codes are still sent; the plot service decides what they mean.
fn warn_unknown_codes(filter: &FilterState) {
    if let Some(g) = filter.geography().filter(|g| !catalog::is_known_geography(g)) {
        tracing::warn!("geography {:?} is not in the catalog", g);
    }
    if let Some(m) = filter.metric().filter(|m| !catalog::is_known_metric(m)) {
        tracing::warn!("metric {:?} is not in the catalog", m);
    }
    for r in filter.races.iter().filter(|r| !r.is_empty() && !catalog::is_known_race(r)) {
        tracing::warn!("race {:?} is not in the catalog", r);
    }
}
