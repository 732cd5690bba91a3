use crate::errors;
use crate::handlers::{Safety, ToolExt};
use crate::server::ReceiptlabServer;
use futures_util::FutureExt;
use receiptlab_core::config::consts::GENERATE_FAILED_MESSAGE;
use receiptlab_core::{ReceiptRequest, ReceiptResult};
use rmcp::{
    ErrorData as McpError,
    handler::server::common::FromContextPart,
    handler::server::router::tool::{ToolRoute, ToolRouter},
    handler::server::wrapper::Parameters,
    model::*,
    schemars, serde,
};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};
use tokio::sync::Semaphore;
use tokio::task::spawn_blocking;

pub const GENERATE_TOOL: &str = "receipt.generate";
pub const CHECK_TOOL: &str = "receipt.check";

pub struct ReceiptTool;

impl ReceiptTool {
    pub fn into_router(self) -> ToolRouter<ReceiptlabServer> {
        ToolRouter::new()
            .with_route(ToolRoute::new_dyn(Self::generate_attr(), |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<ReceiptRequest>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::generate(server, args).await
                }
                .boxed()
            }))
            .with_route(ToolRoute::new_dyn(Self::check_attr(), |ctx| {
                let server = ctx.service;
                async move { Self::check(server).await }.boxed()
            }))
    }

    fn generate_attr() -> Tool {
        Tool::new(
            Cow::Borrowed(GENERATE_TOOL),
            "Generate a transfer receipt document from the six transfer fields",
            rmcp::handler::server::common::schema_for_type::<ReceiptRequest>(),
        )
        .with_safety(Safety {
            network: false,
            reads: true,
            writes: false,
        })
    }

    fn check_attr() -> Tool {
        Tool::new(
            Cow::Borrowed(CHECK_TOOL),
            "Report which placeholders the receipt template contains; fails in strict mode when one is missing",
            rmcp::handler::server::common::schema_for_type::<ReceiptCheckArgs>(),
        )
        .with_safety(Safety {
            network: false,
            reads: true,
            writes: false,
        })
    }

    /// `receipt.generate`: template faults come back as `success: false`,
    /// never as a protocol error
    pub async fn generate(
        server: &ReceiptlabServer,
        args: ReceiptRequest,
    ) -> Result<CallToolResult, McpError> {
        let service = Arc::clone(&server.context.service);
        let result = run_blocking(move || Ok(service.generate(&args)))
            .await
            .unwrap_or_else(|err| {
                tracing::error!(error = %err.message, "receipt generation task failed");
                ReceiptResult::failure(GENERATE_FAILED_MESSAGE)
            });
        to_call_result(&result)
    }

    pub async fn check(server: &ReceiptlabServer) -> Result<CallToolResult, McpError> {
        let service = Arc::clone(&server.context.service);
        let report = run_blocking(move || {
            let report = service.check().map_err(errors::from_core_error)?;
            service
                .ensure_complete(&report)
                .map_err(errors::from_core_error)?;
            Ok(report)
        })
        .await?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&report).map_err(errors::from_display)?,
        )]))
    }
}

fn to_call_result(result: &ReceiptResult) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(result).map_err(errors::from_display)?;
    let content = vec![Content::text(json)];
    if result.is_success() {
        Ok(CallToolResult::success(content))
    } else {
        Ok(CallToolResult::error(content))
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, McpError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, McpError> + Send + 'static,
{
    let permit = blocking_semaphore()
        .acquire_owned()
        .await
        .map_err(errors::from_display)?;

    spawn_blocking(move || {
        let _permit = permit;
        f()
    })
    .await
    .map_err(errors::from_display)?
}

fn blocking_semaphore() -> Arc<Semaphore> {
    static SEM: OnceLock<Arc<Semaphore>> = OnceLock::new();
    SEM.get_or_init(|| Arc::new(Semaphore::new(4))).clone()
}

#[derive(serde::Deserialize, schemars::JsonSchema)]
pub struct ReceiptCheckArgs {}
