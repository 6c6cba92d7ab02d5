use std::time::Duration;

use crate::arn::Arn;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ACCOUNT_ID: &str = "000000000000";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Upper bound for one transport call. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Region used when building ARNs locally.
    pub region: String,
    /// Account used when building ARNs locally.
    pub account_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            region: DEFAULT_REGION.to_string(),
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// The ARN the service gives a topic called `name` in this region and
    /// account.
    pub fn topic_arn(&self, name: &str) -> String {
        Arn::topic(&self.region, &self.account_id, name).to_string()
    }
}
