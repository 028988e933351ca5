//! Profile command implementation
//!
//! Computes the requested arrays and prints them as an aligned table.

use tracing::info;

use crate::{CommonArgs, Result};

/// Run the profile command
pub fn run(args: &CommonArgs) -> Result<()> {
    info!("Profiling {:?} ({:?})", args.function, args.statistic);

    let report = super::compute_report(args)?;

    let mut header = format!("{:>14} {:>14}", "x", "Value");
    if report.delta.is_some() {
        header.push_str(&format!(" {:>14}", "Delta"));
    }
    if report.gamma.is_some() {
        header.push_str(&format!(" {:>14}", "Gamma"));
    }
    println!("{}", header);

    for i in 0..report.s0.len() {
        let mut row = format!("{:>14.6} {:>14.6}", report.s0[i], report.value[i]);
        if let Some(delta) = &report.delta {
            row.push_str(&format!(" {:>14.6}", delta[i]));
        }
        if let Some(gamma) = &report.gamma {
            row.push_str(&format!(" {:>14.6}", gamma[i]));
        }
        println!("{}", row);
    }

    info!("Profile complete: {} grid points", report.s0.len());
    Ok(())
}
