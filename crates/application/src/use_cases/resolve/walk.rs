use rootwalk_domain::DomainError;
use std::net::Ipv4Addr;

use super::ResolutionLimits;

/// Result of working through one server pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Answer(Ipv4Addr),
    /// A server gave a usable reply that settles the question negatively
    /// (non-zero rcode, or nothing to follow). Siblings are not retried.
    NoAnswer,
    /// Every candidate failed or led nowhere; the caller may try its own
    /// remaining candidates.
    Exhausted,
}

impl Step {
    pub(super) fn into_address(self) -> Option<Ipv4Addr> {
        match self {
            Step::Answer(ip) => Some(ip),
            Step::NoAnswer | Step::Exhausted => None,
        }
    }
}

/// Hops taken so far on the current branch.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Depth {
    pub delegation: u8,
    pub cname: u8,
}

impl Depth {
    pub(super) fn referral(self, limits: &ResolutionLimits) -> Result<Self, DomainError> {
        if self.delegation >= limits.max_delegation_depth {
            return Err(DomainError::RecursionLimitExceeded {
                limit: limits.max_delegation_depth,
            });
        }
        Ok(Self {
            delegation: self.delegation + 1,
            ..self
        })
    }

    /// A CNAME restarts the delegation walk from the roots.
    pub(super) fn alias(self, limits: &ResolutionLimits) -> Result<Self, DomainError> {
        if self.cname >= limits.max_cname_depth {
            return Err(DomainError::RecursionLimitExceeded {
                limit: limits.max_cname_depth,
            });
        }
        Ok(Self {
            delegation: 0,
            cname: self.cname + 1,
        })
    }
}

/// State shared by every nested lookup of one resolution.
#[derive(Debug, Default)]
pub(super) struct WalkState {
    pub queries: u32,
}

impl WalkState {
    pub(super) fn spend_query(&mut self, limits: &ResolutionLimits) -> Result<(), DomainError> {
        if self.queries >= limits.max_queries {
            return Err(DomainError::QueryBudgetExhausted {
                limit: limits.max_queries,
            });
        }
        self.queries += 1;
        Ok(())
    }
}
