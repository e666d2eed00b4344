//! FILENAME: app/src/lib.rs
//! PURPOSE: Main library entry point for the dashboard driver.
//! CONTEXT: Stands in for the dashboard's rendering collaborator: load the
//! dataset, apply the operator's selection, recompute every derived table,
//! write the downloadable CSV artifacts. One full pass per invocation.

use dashboard_engine::{artifacts, filter_rows, DashboardTables};
use std::fs;
use std::path::PathBuf;

pub mod cli;
pub mod source;

pub use cli::Cli;
pub use source::{DataSource, DEFAULT_DATA_URL};

/// What a completed run did, for the closing summary line.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_selected: usize,
    pub artifacts: Vec<PathBuf>,
}

pub fn run(cli: &Cli) -> Result<RunSummary, String> {
    let source = cli.source();
    log::info!("loading dataset from {}", source);
    let data = source.load()?;
    log::info!("loaded {} rows", data.len());

    let selection = cli.selection(&data);
    let rows = filter_rows(&data, &selection);
    log::info!("{} of {} rows match the selection", rows.len(), data.len());

    let tables = DashboardTables::from_rows(&rows);

    fs::create_dir_all(&cli.out_dir)
        .map_err(|e| format!("failed to create {}: {}", cli.out_dir.display(), e))?;

    let mut written = Vec::new();
    for artifact in artifacts(&data, &tables) {
        let path = cli.out_dir.join(artifact.file_name);
        fs::write(&path, &artifact.bytes)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }

    if cli.preview {
        print_preview(&tables);
    }

    Ok(RunSummary {
        rows_loaded: data.len(),
        rows_selected: rows.len(),
        artifacts: written,
    })
}

/// Prints the sample table and the per-chart totals.
fn print_preview(tables: &DashboardTables) {
    println!("Region\tState\tCity\tCategory\tSales\tProfit\tQuantity");
    for row in &tables.preview.rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.region, row.state, row.city, row.category, row.sales, row.profit, row.quantity
        );
    }
    println!();
    println!("Sales by Category:");
    for row in &tables.sales_by_category.rows {
        println!("  {}: {:.2}", row.key.join(" / "), row.value);
    }
    println!("Sales by Region:");
    for row in &tables.sales_by_region.rows {
        println!("  {}: {:.2}", row.key.join(" / "), row.value);
    }
    println!("Sales by Segment:");
    for row in &tables.sales_by_segment.rows {
        println!("  {}: {:.2}", row.key.join(" / "), row.value);
    }
    println!("Monthly sales:");
    for point in &tables.sales_over_time.points {
        println!("  {}: {:.2}", point.label, point.sales);
    }
}
