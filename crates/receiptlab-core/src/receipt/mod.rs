//! Receipt generation - request/response contract and the substitution service

mod download;
mod model;
mod service;

pub use download::{download_file_name, save_receipt};
pub use model::{ReceiptRequest, ReceiptResult};
pub use service::ReceiptService;
