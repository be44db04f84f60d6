use crate::dns_message::{ResourceType, ResponseCode};
use thiserror::Error;

/// Failures of the wire codec. Every variant means the byte sequence is not a
/// well-formed DNS message (or the name cannot be put on the wire).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Message truncated: need {needed} bytes at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    #[error("Label '{label}' exceeds 63 bytes")]
    LabelTooLong { label: String },

    #[error("Encoded name is {length} bytes, limit is 255")]
    NameTooLong { length: usize },

    #[error("Empty label inside domain name")]
    EmptyLabel,

    #[error("Label contains non-ASCII characters")]
    NonAsciiLabel,

    #[error("Compression pointer at offset {offset} targets {target}, outside the message")]
    PointerOutOfBounds { offset: usize, target: usize },

    #[error("Compression pointer at offset {offset} targets {target}, which is not an earlier offset")]
    ForwardPointer { offset: usize, target: usize },

    #[error("Compression pointer loop detected at offset {offset}")]
    PointerLoop { offset: usize },

    #[error("Unsupported label type 0x{byte:02x} at offset {offset}")]
    UnsupportedLabelType { offset: usize, byte: u8 },

    #[error("Invalid {rtype} record data: {reason}")]
    InvalidRecordData { rtype: ResourceType, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    Format(#[from] WireError),

    #[error("Message is not a response")]
    NotAResponse,

    #[error("Response id {actual} does not match query id {expected}")]
    IdMismatch { expected: u16, actual: u16 },

    #[error("Server answered with {0}")]
    ResponseCode(ResponseCode),

    #[error("Timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport failure talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Resolution exceeded the depth limit of {limit}")]
    RecursionLimitExceeded { limit: u8 },

    #[error("Resolution exceeded the budget of {limit} queries")]
    QueryBudgetExhausted { limit: u32 },
}

impl DomainError {
    /// Errors that disqualify a single nameserver candidate without saying
    /// anything about the domain being resolved.
    pub fn is_candidate_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Format(_)
                | DomainError::NotAResponse
                | DomainError::IdMismatch { .. }
                | DomainError::TransportTimeout { .. }
                | DomainError::Transport { .. }
        )
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::Transport { .. }
        )
    }
}
