//! Error handling for the analytics module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Failed to decode a JSON body from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response decoded cleanly but carried no `data` payload.
    #[error("Response from {endpoint} is missing the data payload")]
    MissingData { endpoint: String },
}

impl AnalyticsError {
    pub async fn from_response(response: reqwest::Response) -> AnalyticsError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        AnalyticsError::Http { status, message }
    }
}
