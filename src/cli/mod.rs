//! Command-line interface module.

mod args;

use anyhow::Result;

use crate::image::checkerboard::{count_checkerboard, remove_checkerboard};
use crate::log;
use crate::utils::plural::plural_count;

pub use args::Cli;

/// Run one filter pass as described by the parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.dry_run {
        let report = count_checkerboard(&cli.input)?;
        log!("dry-run"; "{}: {} of {} would be made transparent ({}x{})",
            cli.input.display(),
            plural_count(report.modified, "pixel"),
            report.pixels(),
            report.width,
            report.height);
        return Ok(());
    }

    log!("nobg"; "processing {} -> {}", cli.input.display(), cli.output.display());
    let modified = remove_checkerboard(&cli.input, &cli.output)?;
    log!("nobg"; "modified {}", plural_count(modified, "pixel"));
    Ok(())
}
