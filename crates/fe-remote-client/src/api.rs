//! Resource client for the File-Engine remote service endpoints.

use crate::cancel::CancellationToken;
use crate::config::ClientConfig;
use crate::http::HttpClient;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Search endpoint (POST, parameters in the query string).
pub(crate) const SEARCH_PATH: &str = "/search";
/// Paged results endpoint.
pub(crate) const RESULTS_PATH: &str = "/results";
/// File download endpoint.
pub(crate) const DOWNLOAD_PATH: &str = "/download";

/// One entry of a results page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    /// Absolute path of the matched file on the service's machine.
    pub file_path: String,
    /// Whether the path is a directory. Directories are zipped by the
    /// service before download.
    pub is_dir: bool,
}

/// Client for the File-Engine remote search service.
///
/// Each operation is a single stateless request/response round trip;
/// concurrent calls are not coordinated or deduplicated.
pub struct FileEngineClient {
    http: HttpClient,
}

impl FileEngineClient {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Trigger a search for `input_text`.
    ///
    /// The service dispatches the search and replies once it has results
    /// buffered; fetch them with [`get_results`](Self::get_results). The
    /// service rejects empty input and input of 300 or more characters
    /// with a failure envelope.
    pub async fn search(&self, input_text: &str) -> Result<Value> {
        self.http
            .post(SEARCH_PATH, &[("inputText", input_text.to_string())])
            .await
    }

    /// Fetch one page of search results.
    ///
    /// Pages are 1-based on the server. Neither value is bounds-checked
    /// here; an out-of-range page simply yields an empty list.
    pub async fn get_results(&self, page_num: u32, page_size: u32) -> Result<Vec<ResultEntry>> {
        let data = self
            .http
            .get(
                RESULTS_PATH,
                &[
                    ("pageNum", page_num.to_string()),
                    ("pageSize", page_size.to_string()),
                ],
            )
            .await?;

        let entries: Vec<ResultEntry> = serde_json::from_value(data)?;
        debug!("Fetched {} result entries (page {})", entries.len(), page_num);
        Ok(entries)
    }

    /// Download the file at `file_path` on the service's machine.
    ///
    /// Returns the raw bytes of the file; directories arrive as a zip
    /// archive built by the service. The download can be aborted through
    /// `cancel`, in which case [`ClientError::Cancelled`] is returned.
    ///
    /// [`ClientError::Cancelled`]: crate::ClientError::Cancelled
    pub async fn download(
        &self,
        file_path: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>> {
        self.http
            .get_bytes(
                DOWNLOAD_PATH,
                &[("filePath", file_path.to_string())],
                cancel,
            )
            .await
    }
}
