//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use receiptlab_core::ReceiptRequest;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "receiptlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to receiptlab.toml (default: search current and parent directories)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a transfer receipt
    Generate(GenerateArgs),

    /// Check the receipt template's placeholders
    Check {
        /// Template to check instead of the configured one
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// MCP server
    #[command(subcommand)]
    Mcp(McpCommands),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Sender name
    #[arg(long = "from", value_name = "NAME", allow_hyphen_values = true)]
    pub from_text: String,

    /// Receiver name
    #[arg(long = "to", value_name = "NAME", allow_hyphen_values = true)]
    pub to_text: String,

    /// Receiver account number
    #[arg(long = "account", value_name = "NUMBER", allow_hyphen_values = true)]
    pub to_number: String,

    /// Transfer purpose
    #[arg(long, allow_hyphen_values = true)]
    pub purpose: String,

    /// Transfer date (default: today)
    #[arg(long, allow_hyphen_values = true)]
    pub date: Option<String>,

    /// Amount
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Template to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Save as <DIR>/<prefix>-<millis>.html instead of printing (default DIR: output.dir)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Accept empty field values
    #[arg(long)]
    pub allow_empty: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> ReceiptRequest {
        ReceiptRequest {
            from_text: self.from_text.clone(),
            to_text: self.to_text.clone(),
            to_number: self.to_number.clone(),
            purpose: self.purpose.clone(),
            date: self.date.clone().unwrap_or_else(ReceiptRequest::today),
            price: self.price.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum McpCommands {
    /// Serve MCP over stdin/stdout
    Stdio {
        /// Template to serve instead of the configured one
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args_map_to_request() {
        let cli = Cli::parse_from([
            "receiptlab",
            "generate",
            "--from",
            "Ahmed Mohammed",
            "--to",
            "Sara Ali",
            "--account",
            "SA1234567890123456789012",
            "--purpose",
            "Financial transfer",
            "--date",
            "2025-12-01",
            "--price",
            "1000",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };
        let request = args.to_request();
        assert_eq!(request.from_text, "Ahmed Mohammed");
        assert_eq!(request.to_number, "SA1234567890123456789012");
        assert_eq!(request.date, "2025-12-01");
        assert!(args.save.is_none());
    }

    #[test]
    fn test_save_flag_without_dir() {
        let cli = Cli::parse_from([
            "receiptlab", "generate", "--from", "a", "--to", "b", "--account", "c",
            "--purpose", "d", "--price", "-5", "--save",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };
        assert!(matches!(args.save, Some(None)));
        assert_eq!(args.price, "-5");
        assert_eq!(args.to_request().date, ReceiptRequest::today());
    }
}
