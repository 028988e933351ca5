//! Chart command implementation
//!
//! Computes the requested arrays and emits the Chart.js-compatible JSON
//! figure to stdout or a file.

use tracing::info;

use crate::{CommonArgs, Result};

/// Run the chart command
pub fn run(args: &CommonArgs, output: Option<&str>) -> Result<()> {
    info!("Charting {:?} ({:?})", args.function, args.statistic);

    let report = super::compute_report(args)?;
    let figure = report.to_figure();
    let json = figure.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!("Figure written to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
