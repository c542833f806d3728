//! Async client library for the File-Engine remote search service.
//!
//! The service exposes a small HTTP surface: trigger a search, page
//! through the buffered results, download a matched file. Every JSON
//! response is wrapped in a `{code, message, data}` envelope; this crate
//! strips the envelope on success and surfaces failures as typed errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use fe_remote_client::{CancellationToken, ClientConfig, FileEngineClient};
//!
//! #[tokio::main]
//! async fn main() -> fe_remote_client::Result<()> {
//!     let client = FileEngineClient::new(ClientConfig::development())?;
//!
//!     client.search("report").await?;
//!     let entries = client.get_results(1, 50).await?;
//!     println!("Found {} entries", entries.len());
//!
//!     if let Some(entry) = entries.first() {
//!         let cancel = CancellationToken::new();
//!         let bytes = client.download(&entry.file_path, &cancel).await?;
//!         println!("Downloaded {} bytes", bytes.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cancel;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;

mod api;

// Re-export commonly used types
pub use api::{FileEngineClient, ResultEntry};
pub use cancel::{CancellationToken, CancelledError};
pub use config::{ClientConfig, NetworkConfig};
pub use envelope::{Envelope, SUCCESS_CODE};
pub use error::{ClientError, Result};
pub use http::HttpClient;
