use receiptlab_core::ReceiptService;
use std::sync::Arc;

/// Per-server state handed to every tool call
#[derive(Clone, Debug)]
pub struct McpContext {
    pub service: Arc<ReceiptService>,
}

impl McpContext {
    pub fn new(service: ReceiptService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
