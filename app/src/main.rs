//! FILENAME: app/src/main.rs

use clap::Parser;

fn main() {
    env_logger::init();
    let cli = app_lib::Cli::parse();

    match app_lib::run(&cli) {
        Ok(summary) => {
            println!(
                "{} of {} rows selected; wrote {} artifacts to {}",
                summary.rows_selected,
                summary.rows_loaded,
                summary.artifacts.len(),
                cli.out_dir.display()
            );
        }
        Err(message) => {
            log::error!("{message}");
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}
