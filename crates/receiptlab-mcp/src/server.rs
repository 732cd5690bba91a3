use crate::context::McpContext;
use crate::handlers::receipt::ReceiptTool;
use anyhow::Result;
use receiptlab_core::ReceiptService;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
    transport::stdio,
};

/// MCP server exposing receipt generation
#[derive(Clone)]
pub struct ReceiptlabServer {
    pub context: McpContext,
    pub tool_router: ToolRouter<ReceiptlabServer>,
}

impl ReceiptlabServer {
    pub fn new(context: McpContext) -> Self {
        Self {
            context,
            tool_router: ReceiptTool.into_router(),
        }
    }

    /// Serve over stdin/stdout until the client disconnects
    pub async fn run_stdio_server(service: ReceiptService) -> Result<()> {
        tracing::info!(
            template = %service.store().path().display(),
            strict = service.is_strict(),
            "starting MCP server on stdio"
        );
        let server = Self::new(McpContext::new(service));
        let running = server.serve(stdio()).await?;
        let reason = running.waiting().await?;
        tracing::info!(?reason, "MCP server stopped");
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for ReceiptlabServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Generates printable transfer receipts. Call receipt.generate with \
                 fromText, toText, toNumber, purpose, date and price."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receiptlab_core::template::TemplateStore;

    #[test]
    fn test_list_tools() {
        let service = ReceiptService::new(TemplateStore::new("/tmp/receipt-template.html"));
        let server = ReceiptlabServer::new(McpContext::new(service));
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().any(|t| t.name == "receipt.generate"));
        assert!(tools.iter().any(|t| t.name == "receipt.check"));
    }

    #[test]
    fn test_get_info_enables_tools() {
        let service = ReceiptService::new(TemplateStore::new("/tmp/receipt-template.html"));
        let server = ReceiptlabServer::new(McpContext::new(service));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("receipt.generate"));
    }
}
