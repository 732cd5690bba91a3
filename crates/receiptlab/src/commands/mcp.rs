use crate::context::Context;
use anyhow::{Context as _, Result};
use receiptlab_mcp::ReceiptlabServer;
use std::path::{Path, PathBuf};

/// Run MCP server in stdio mode
pub fn run_stdio(config: Option<&Path>, template: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, template, verbose)?;
    let service = ctx.service();

    // We need a tokio runtime for the server
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    rt.block_on(async { ReceiptlabServer::run_stdio_server(service).await })
}
