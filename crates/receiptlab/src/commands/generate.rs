//! Generate command - render a receipt and print or save it

use crate::cli::GenerateArgs;
use crate::context::Context;
use crate::output::{print_document, print_json};
use anyhow::{Result, bail};
use chrono::Utc;
use colored::Colorize;
use receiptlab_core::ReceiptResult;
use receiptlab_core::receipt::save_receipt;
use std::path::Path;

/// Generate a receipt from command-line fields
///
/// Prints the document to stdout, or saves it with `--save`. Exits with an
/// error when a field is empty (unless `--allow-empty`) or generation fails.
pub fn run(args: GenerateArgs, config: Option<&Path>, verbose: bool) -> Result<()> {
    let request = args.to_request();

    if !args.allow_empty {
        let empty = request.empty_fields();
        if !empty.is_empty() {
            bail!(
                "empty value for required field(s): {} (pass --allow-empty to accept)",
                empty.join(", ")
            );
        }
    }

    let ctx = Context::new(config, args.template.clone(), verbose)?;
    let service = ctx.service();

    if ctx.verbose {
        eprintln!(
            "{} Generating receipt from {}",
            "→".cyan(),
            service.store().path().display()
        );
    }

    let result = service.generate(&request);
    let html = match &result {
        ReceiptResult::Success { html } => html,
        ReceiptResult::Failure { error } => {
            if args.json {
                print_json(&serde_json::to_string_pretty(&result)?)?;
            }
            bail!("{}", error);
        }
    };

    match args.save {
        Some(dir) => {
            let dir = dir.unwrap_or_else(|| ctx.config.output_dir());
            let path = save_receipt(&dir, &ctx.config.output.prefix, html, Utc::now())?;
            if args.json {
                let saved = serde_json::json!({
                    "success": true,
                    "path": path.display().to_string(),
                });
                print_json(&serde_json::to_string_pretty(&saved)?)?;
            } else {
                println!("{} Saved receipt to {}", "✓".green().bold(), path.display());
            }
        }
        None if args.json => print_json(&serde_json::to_string_pretty(&result)?)?,
        None => print_document(html)?,
    }

    Ok(())
}
