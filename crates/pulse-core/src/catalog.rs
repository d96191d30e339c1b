//! Vocabulary of the plot controls: metric, geography and race/ethnicity codes,
//! week bounds, and the selections each panel starts with.
//!
//! The plot service is the authority on which codes it accepts; the builder
//! passes unknown codes through. These tables back the CLI listings and the
//! panel defaults.

use serde::Serialize;

/// First Household Pulse Survey week covered by the plot service.
pub const WEEK_NUM_MIN: u32 = 13;
/// Last Household Pulse Survey week covered by the plot service.
pub const WEEK_NUM_MAX: u32 = 67;

/// A selectable code and its human-readable title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub title: &'static str,
}

const fn entry(code: &'static str, title: &'static str) -> CatalogEntry {
    CatalogEntry { code, title }
}

/// Survey-derived indicators, in data-dictionary order.
pub const METRICS: &[CatalogEntry] = &[
    entry("uninsured", "Health Insurance Coverage"),
    entry("insured_public", "Public Health Insurance Coverage"),
    entry("inc_loss", "Income Loss"),
    entry("expect_inc_loss", "Expected Income Loss"),
    entry("rent_not_conf", "Rent Payment Confidence"),
    entry("mortgage_not_conf", "Mortgage Payment Confidence"),
    entry("rent_caughtup", "Rent Caught Up"),
    entry("mortgage_caughtup", "Mortgage Caught Up"),
    entry("food_insufficient", "Food Insufficiency"),
    entry("spend_savings", "Savings Spending"),
    entry("spend_credit", "Credit Card & Loan Spending"),
    entry("spend_ui", "Unemployment Insurance Benefit Spending"),
    entry("spend_stimulus", "Stimulus Payment Spending"),
    entry("depression_anxiety_signs", "Depression & Anxiety"),
    entry("mentalhealth_unmet", "Mental Health Needs"),
    entry("expense_dif", "Household Expenses"),
    entry("telework", "Remote Work"),
    entry("eviction_risk", "Eviction Risk"),
    entry("foreclosure_risk", "Foreclosure Risk"),
    entry("spend_snap", "SNAP Spending"),
];

/// Race/ethnicity groups offered by the toggle groups.
pub const RACES: &[CatalogEntry] = &[
    entry("total", "Total"),
    entry("black", "Black"),
    entry("hispanic", "Hispanic"),
    entry("asian", "Asian"),
    entry("white", "White"),
    entry("other", "Other"),
];

/// Nation plus states, keyed by postal code.
pub const GEOGRAPHIES: &[CatalogEntry] = &[
    entry("US", "United States"),
    entry("AL", "Alabama"),
    entry("AK", "Alaska"),
    entry("AZ", "Arizona"),
    entry("AR", "Arkansas"),
    entry("CA", "California"),
    entry("CO", "Colorado"),
    entry("CT", "Connecticut"),
    entry("DE", "Delaware"),
    entry("DC", "District of Columbia"),
    entry("FL", "Florida"),
    entry("GA", "Georgia"),
    entry("HI", "Hawaii"),
    entry("ID", "Idaho"),
    entry("IL", "Illinois"),
    entry("IN", "Indiana"),
    entry("IA", "Iowa"),
    entry("KS", "Kansas"),
    entry("KY", "Kentucky"),
    entry("LA", "Louisiana"),
    entry("ME", "Maine"),
    entry("MD", "Maryland"),
    entry("MA", "Massachusetts"),
    entry("MI", "Michigan"),
    entry("MN", "Minnesota"),
    entry("MS", "Mississippi"),
    entry("MO", "Missouri"),
    entry("MT", "Montana"),
    entry("NE", "Nebraska"),
    entry("NV", "Nevada"),
    entry("NH", "New Hampshire"),
    entry("NJ", "New Jersey"),
    entry("NM", "New Mexico"),
    entry("NY", "New York"),
    entry("NC", "North Carolina"),
    entry("ND", "North Dakota"),
    entry("OH", "Ohio"),
    entry("OK", "Oklahoma"),
    entry("OR", "Oregon"),
    entry("PA", "Pennsylvania"),
    entry("RI", "Rhode Island"),
    entry("SC", "South Carolina"),
    entry("SD", "South Dakota"),
    entry("TN", "Tennessee"),
    entry("TX", "Texas"),
    entry("UT", "Utah"),
    entry("VT", "Vermont"),
    entry("VA", "Virginia"),
    entry("WA", "Washington"),
    entry("WV", "West Virginia"),
    entry("WI", "Wisconsin"),
    entry("WY", "Wyoming"),
];

/// Metric the panels start on.
pub const DEFAULT_METRIC: &str = "food_insufficient";
/// Geography the weekly panel starts on.
pub const DEFAULT_GEOGRAPHY: &str = "US";
/// Race the national panel starts on.
pub const DEFAULT_NATIONAL_RACE: &str = "white";

fn title_of(table: &[CatalogEntry], code: &str) -> Option<&'static str> {
    table.iter().find(|e| e.code == code).map(|e| e.title)
}

pub fn metric_title(code: &str) -> Option<&'static str> {
    title_of(METRICS, code)
}

pub fn race_title(code: &str) -> Option<&'static str> {
    title_of(RACES, code)
}

/// Geography codes match case-sensitively (`US`, not `us`).
pub fn geography_title(code: &str) -> Option<&'static str> {
    title_of(GEOGRAPHIES, code)
}

pub fn is_known_metric(code: &str) -> bool {
    metric_title(code).is_some()
}

pub fn is_known_race(code: &str) -> bool {
    race_title(code).is_some()
}

pub fn is_known_geography(code: &str) -> bool {
    geography_title(code).is_some()
}

/// Clamps a week to `[WEEK_NUM_MIN, WEEK_NUM_MAX]`, as the sliders do.
pub fn clamp_week(week: u32) -> u32 {
    week.clamp(WEEK_NUM_MIN, WEEK_NUM_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn week_bounds() {
        assert!(WEEK_NUM_MIN < WEEK_NUM_MAX);
        assert_eq!(clamp_week(1), WEEK_NUM_MIN);
        assert_eq!(clamp_week(40), 40);
        assert_eq!(clamp_week(500), WEEK_NUM_MAX);
    }

    #[test]
    fn codes_are_unique() {
        for table in [METRICS, RACES, GEOGRAPHIES] {
            let codes: HashSet<_> = table.iter().map(|e| e.code).collect();
            assert_eq!(codes.len(), table.len());
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(metric_title("food_insufficient"), Some("Food Insufficiency"));
        assert_eq!(race_title("black"), Some("Black"));
        assert_eq!(geography_title("WA"), Some("Washington"));
        assert!(geography_title("wa").is_none());
        assert!(!is_known_metric("not_a_metric"));
    }

    #[test]
    fn defaults_are_in_catalog() {
        assert!(is_known_metric(DEFAULT_METRIC));
        assert!(is_known_geography(DEFAULT_GEOGRAPHY));
        assert!(is_known_race(DEFAULT_NATIONAL_RACE));
        assert_eq!(GEOGRAPHIES.len(), 52);
    }
}
