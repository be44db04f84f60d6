use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What to do when a single candidate fails with a malformed or mismatched
/// response, or does not answer at all.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure and try the next candidate in the pool.
    #[default]
    SkipCandidate,

    /// Stop the whole resolution with the candidate's error.
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkipCandidate => "skip_candidate",
            Self::Abort => "abort",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Referral hops (glue or nameserver-name) followed for one name,
    /// nested nameserver lookups included.
    #[serde(default = "default_max_depth")]
    pub max_delegation_depth: u8,

    #[serde(default = "default_max_depth")]
    pub max_cname_depth: u8,

    /// Queries sent for one resolution, across every nested lookup.
    #[serde(default = "default_max_queries")]
    pub max_queries: u32,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Larger responses are cut at this size; there is no TCP fallback.
    #[serde(default = "default_receive_buffer_size")]
    pub receive_buffer_size: usize,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Fixes query ids and candidate order when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            max_delegation_depth: default_max_depth(),
            max_cname_depth: default_max_depth(),
            max_queries: default_max_queries(),
            port: default_port(),
            receive_buffer_size: default_receive_buffer_size(),
            failure_policy: FailurePolicy::default(),
            seed: None,
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_max_depth() -> u8 {
    30
}

fn default_max_queries() -> u32 {
    256
}

fn default_port() -> u16 {
    53
}

fn default_receive_buffer_size() -> usize {
    1024
}
