pub mod cli;
pub mod config;
pub mod errors;
pub mod uploader;
pub mod version;

pub use config::{resolve, InputSource, UploadFlags};
pub use errors::{AppError, AppResult};
pub use uploader::{HttpTransport, Transport, UploadReceipt, Uploader};
