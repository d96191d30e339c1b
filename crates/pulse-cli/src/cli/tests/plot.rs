//! Tests for the `url` and `fetch` subcommands and their selection flags.

use super::{command, parse};
use crate::cli::{Cli, CliCommand, PlotArgs};
use clap::Parser;
use pulse_core::plot_url::{PlotEndpoint, PlotUrlBuilder, WeekRange};

fn url_plot(args: &[&str]) -> PlotArgs {
    match command(args) {
        CliCommand::Url { plot } => plot,
        _ => panic!("expected Url"),
    }
}

fn built(plot: &PlotArgs) -> String {
    PlotUrlBuilder::default()
        .build(plot.endpoint(), &plot.filter())
        .to_string()
}

#[test]
fn weekly_defaults() {
    let plot = url_plot(&["pulse", "url", "weekly"]);
    assert_eq!(plot.endpoint(), PlotEndpoint::Weekly);
    assert_eq!(
        built(&plot),
        concat!(
            "https://pulse-analysis-production.up.railway.app/weekly",
            "?week_min=13&week_max=67&geography=US&metric=food_insufficient"
        )
    );
}

#[test]
fn weekly_flags() {
    let plot = url_plot(&[
        "pulse", "url", "weekly", "--geography", "WA", "--weeks", "20-30", "--race", "black,white",
        "--race", "asian", "--metric", "telework",
    ]);
    match &plot {
        PlotArgs::Weekly(a) => {
            assert_eq!(a.weeks, Some(WeekRange::new(20, 30)));
            assert_eq!(a.races, ["black", "white", "asian"]);
        }
        _ => panic!("expected Weekly"),
    }
    assert!(built(&plot).ends_with(
        "/weekly?week_min=20&week_max=30&race=black%2Cwhite%2Casian&geography=WA&metric=telework"
    ));
}

#[test]
fn weekly_no_defaults_and_empty_values() {
    let plot = url_plot(&["pulse", "url", "weekly", "--no-defaults"]);
    assert!(built(&plot).ends_with("/weekly"));

    let plot = url_plot(&["pulse", "url", "weekly", "--metric", "", "--geography", ""]);
    assert!(built(&plot).ends_with("/weekly?week_min=13&week_max=67"));
}

#[test]
fn weekly_rejects_bad_week_range() {
    assert!(Cli::try_parse_from(["pulse", "url", "weekly", "--weeks", "13"]).is_err());
    assert!(Cli::try_parse_from(["pulse", "url", "weekly", "--weeks", "a-b"]).is_err());
}

#[test]
fn national_defaults_and_flags() {
    let plot = url_plot(&["pulse", "url", "national"]);
    assert!(built(&plot).ends_with("/national?week=67&race=white&metric=food_insufficient"));

    let plot = url_plot(&["pulse", "url", "national", "--week", "63", "--race", "black"]);
    assert!(built(&plot).ends_with("/national?week=63&race=black&metric=food_insufficient"));

    let plot = url_plot(&["pulse", "url", "national", "--no-defaults", "--week", "20"]);
    assert!(built(&plot).ends_with("/national?week=20"));
}

#[test]
fn fetch_with_output() {
    match command(&["pulse", "fetch", "national", "--week", "40", "-o", "/tmp/p.png"]) {
        CliCommand::Fetch { plot, output } => {
            assert_eq!(plot.endpoint(), PlotEndpoint::National);
            assert_eq!(output.as_deref(), Some(std::path::Path::new("/tmp/p.png")));
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn fetch_without_output() {
    match command(&["pulse", "fetch", "weekly"]) {
        CliCommand::Fetch { output, .. } => assert!(output.is_none()),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn global_base_url() {
    let cli = parse(&["pulse", "url", "weekly", "--base-url", "http://localhost:8000"]);
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
    let cli = parse(&["pulse", "--base-url", "http://localhost:8000", "url", "national"]);
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
}
