//! Plot panels: transient control state plus the URL of the last confirmed plot.
//!
//! Setters only record the new selection. The displayed URL changes when
//! `plot()` is called, so a burst of edits collapses into whatever state is
//! current at that moment.

use crate::catalog::{self, WEEK_NUM_MAX, WEEK_NUM_MIN};
use crate::plot_url::{FilterState, PlotEndpoint, PlotUrlBuilder, WeekRange, WeekSelector};
use url::Url;

/// Controls of the weekly plot: race toggles (any number), week range slider,
/// metric and geography pickers.
#[derive(Debug, Clone)]
pub struct WeeklyPanel {
    builder: PlotUrlBuilder,
    geography: String,
    metric: String,
    weeks: WeekRange,
    races: Vec<String>,
    plot_url: Url,
}

impl WeeklyPanel {
    /// Starts on the catalog defaults with the initial plot already built.
    pub fn new(builder: PlotUrlBuilder) -> Self {
        let mut panel = Self {
            plot_url: builder.base().clone(),
            builder,
            geography: catalog::DEFAULT_GEOGRAPHY.to_string(),
            metric: catalog::DEFAULT_METRIC.to_string(),
            weeks: WeekRange::new(WEEK_NUM_MIN, WEEK_NUM_MAX),
            races: Vec::new(),
        };
        panel.plot();
        panel
    }

    pub fn set_geography(&mut self, geography: impl Into<String>) {
        self.geography = geography.into();
    }

    pub fn set_metric(&mut self, metric: impl Into<String>) {
        self.metric = metric.into();
    }

    /// Both ends are clamped to the slider bounds.
    pub fn set_weeks(&mut self, weeks: WeekRange) {
        self.weeks = WeekRange::new(catalog::clamp_week(weeks.min), catalog::clamp_week(weeks.max));
    }

    pub fn set_races<I, S>(&mut self, races: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.races = races.into_iter().map(Into::into).collect();
    }

    pub fn filter(&self) -> FilterState {
        FilterState {
            geography: Some(self.geography.clone()),
            metric: self.metric.clone(),
            weeks: Some(WeekSelector::Range(self.weeks)),
            races: self.races.clone(),
        }
    }

    /// Rebuilds the plot URL from the current selections.
    pub fn plot(&mut self) -> &Url {
        self.plot_url = self.builder.build(PlotEndpoint::Weekly, &self.filter());
        tracing::debug!(url = %self.plot_url, "weekly plot requested");
        &self.plot_url
    }

    /// URL of the last `plot()`; unaffected by later edits.
    pub fn plot_url(&self) -> &Url {
        &self.plot_url
    }
}

/// Controls of the national plot: single race toggle, week slider and metric picker.
#[derive(Debug, Clone)]
pub struct NationalPanel {
    builder: PlotUrlBuilder,
    metric: String,
    week: u32,
    race: String,
    plot_url: Url,
}

impl NationalPanel {
    pub fn new(builder: PlotUrlBuilder) -> Self {
        let mut panel = Self {
            plot_url: builder.base().clone(),
            builder,
            metric: catalog::DEFAULT_METRIC.to_string(),
            week: WEEK_NUM_MAX,
            race: catalog::DEFAULT_NATIONAL_RACE.to_string(),
        };
        panel.plot();
        panel
    }

    pub fn set_metric(&mut self, metric: impl Into<String>) {
        self.metric = metric.into();
    }

    pub fn set_week(&mut self, week: u32) {
        self.week = catalog::clamp_week(week);
    }

    /// An empty race deselects the toggle group.
    pub fn set_race(&mut self, race: impl Into<String>) {
        self.race = race.into();
    }

    pub fn filter(&self) -> FilterState {
        FilterState::national(Some(self.week), Some(self.race.as_str()), &self.metric)
    }

    pub fn plot(&mut self) -> &Url {
        self.plot_url = self.builder.build(PlotEndpoint::National, &self.filter());
        tracing::debug!(url = %self.plot_url, "national plot requested");
        &self.plot_url
    }

    pub fn plot_url(&self) -> &Url {
        &self.plot_url
    }
}
