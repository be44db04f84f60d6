use rootwalk_domain::{FailurePolicy, ResolverConfig};

/// Bounds applied to one call of
/// [`ResolveDomainUseCase::resolve`](super::ResolveDomainUseCase::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionLimits {
    pub max_delegation_depth: u8,
    pub max_cname_depth: u8,
    pub max_queries: u32,
    pub failure_policy: FailurePolicy,
}

impl Default for ResolutionLimits {
    fn default() -> Self {
        Self::from(&ResolverConfig::default())
    }
}

impl From<&ResolverConfig> for ResolutionLimits {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            max_delegation_depth: config.max_delegation_depth,
            max_cname_depth: config.max_cname_depth,
            max_queries: config.max_queries,
            failure_policy: config.failure_policy,
        }
    }
}
