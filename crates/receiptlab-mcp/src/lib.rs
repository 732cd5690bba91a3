// Re-export rmcp for convenience
pub use rmcp;

pub mod context;
pub mod errors;
pub mod handlers;
pub mod server;

pub use context::McpContext;
pub use server::ReceiptlabServer;
