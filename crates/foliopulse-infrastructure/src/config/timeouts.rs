use std::time::Duration;

/// Timeouts applied to every outbound GitHub request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Whole-request timeout (default: 30 seconds)
    pub http_request: Duration,

    /// TCP/TLS connect timeout (default: 10 seconds)
    pub connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            connect: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set request timeout
    pub fn with_http_request(mut self, duration: Duration) -> Self {
        self.http_request = duration;
        self
    }

    /// Builder pattern: set connect timeout
    pub fn with_connect(mut self, duration: Duration) -> Self {
        self.connect = duration;
        self
    }
}
