//! FILENAME: app/src/cli.rs
//! Command-line surface: dataset source, filter selection, output location.

use crate::source::{DataSource, DEFAULT_DATA_URL};
use chrono::NaiveDate;
use clap::Parser;
use dashboard_engine::{DateRange, FilterSelection, GeoSelection};
use dataset::Dataset;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "superstore-dash",
    about = "Filters the Superstore sales dataset and writes the dashboard's derived tables as CSV",
    version
)]
pub struct Cli {
    /// Local dataset file (.xlsx or .csv).
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Remote dataset location. Without --file, defaults to the fixed
    /// Superstore workbook.
    #[arg(long)]
    pub url: Option<String>,

    /// Inclusive start of the order-date range (YYYY-MM-DD).
    /// Defaults to the earliest order date in the dataset.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Inclusive end of the order-date range (YYYY-MM-DD).
    /// Defaults to the latest order date in the dataset.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Keep only these regions. Repeat for multiple values; omit for all.
    #[arg(long = "region")]
    pub regions: Vec<String>,

    /// Keep only these states. Repeat for multiple values; omit for all.
    #[arg(long = "state")]
    pub states: Vec<String>,

    /// Keep only these cities. Repeat for multiple values; omit for all.
    #[arg(long = "city")]
    pub cities: Vec<String>,

    /// Directory the CSV artifacts are written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the preview table and summary totals to stdout.
    #[arg(long)]
    pub preview: bool,
}

impl Cli {
    pub fn source(&self) -> DataSource {
        match (&self.file, &self.url) {
            (Some(path), _) => DataSource::File(path.clone()),
            (None, Some(url)) => DataSource::Remote(url.clone()),
            (None, None) => DataSource::Remote(DEFAULT_DATA_URL.to_string()),
        }
    }

    /// Builds the filter selection, defaulting unset date bounds to the
    /// dataset's span. An empty dataset gets an unbounded range; every
    /// derived table comes out empty either way.
    pub fn selection(&self, dataset: &Dataset) -> FilterSelection {
        let span = dataset.date_span();
        let start = self
            .start
            .or(span.map(|(min, _)| min))
            .unwrap_or(NaiveDate::MIN);
        let end = self
            .end
            .or(span.map(|(_, max)| max))
            .unwrap_or(NaiveDate::MAX);

        let mut geo = GeoSelection::default();
        geo.regions.extend(self.regions.iter().cloned());
        geo.states.extend(self.states.iter().cloned());
        geo.cities.extend(self.cities.iter().cloned());

        FilterSelection {
            dates: DateRange::new(start, end),
            geo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_remote_workbook() {
        let cli = Cli::parse_from(["superstore-dash"]);
        assert!(matches!(cli.source(), DataSource::Remote(url) if url == DEFAULT_DATA_URL));
    }

    #[test]
    fn file_takes_precedence() {
        let cli = Cli::parse_from(["superstore-dash", "--file", "data.csv"]);
        assert!(matches!(cli.source(), DataSource::File(p) if p == PathBuf::from("data.csv")));
    }

    #[test]
    fn repeated_geo_flags_accumulate() {
        let cli = Cli::parse_from([
            "superstore-dash",
            "--region",
            "East",
            "--region",
            "West",
            "--state",
            "New York",
        ]);
        let selection = cli.selection(&Dataset::default());
        assert_eq!(selection.geo.regions.len(), 2);
        assert!(selection.geo.states.contains("New York"));
        assert!(selection.geo.cities.is_empty());
    }

    #[test]
    fn date_flags_override_the_span() {
        let cli = Cli::parse_from(["superstore-dash", "--start", "2023-01-01"]);
        let selection = cli.selection(&Dataset::default());
        assert_eq!(
            selection.dates.start,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(selection.dates.end, NaiveDate::MAX);
    }
}
