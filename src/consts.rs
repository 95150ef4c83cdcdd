pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the dashboard pipelines and UI,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================
    // Queue sizes are far above the four-pipeline worst case (one update and a
    // handful of events per pipeline) while keeping memory bounded.

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event channel capacity shared by the fetch pipelines.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Panel update channel capacity. One message per pipeline per run.
    pub const UPDATE_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Number of rows shown in the top products table.
    pub const TOP_PRODUCTS_LIMIT: usize = 5;

    /// Number of fetch pipelines feeding the dashboard.
    pub const PIPELINE_COUNT: usize = 4;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts for the analytics API.
    pub mod http {
        use std::time::Duration;

        /// Maximum time to establish a connection (seconds).
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum time for a complete request/response round trip (seconds).
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
