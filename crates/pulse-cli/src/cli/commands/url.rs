//! `pulse url` – print the plot request URL.

use crate::cli::PlotArgs;
use pulse_core::plot_url::PlotUrlBuilder;

pub fn run_url(builder: &PlotUrlBuilder, plot: &PlotArgs) {
    let url = builder.build(plot.endpoint(), &plot.filter());
    println!("{}", url);
}
