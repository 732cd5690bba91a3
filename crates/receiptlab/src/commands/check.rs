//! Check command - report placeholder presence in the template

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn run(
    template: Option<PathBuf>,
    json: bool,
    config: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, template, verbose)?;
    let service = ctx.service();
    let report = service.check()?;

    if json {
        print_json(&serde_json::to_string_pretty(&report)?)?;
    } else {
        println!("Template: {}", report.path.display());
        for status in &report.placeholders {
            let token = status.placeholder.token();
            match status.occurrences {
                0 => println!("  {} {} missing, value will be dropped", "✗".red(), token),
                1 => println!("  {} {}", "✓".green(), token),
                n => println!(
                    "  {} {} appears {} times, only the first is replaced",
                    "!".yellow(),
                    token,
                    n
                ),
            }
        }
    }

    service.ensure_complete(&report)?;

    if !json && report.is_complete() {
        println!("{} Template OK", "✓".green().bold());
    }

    Ok(())
}
