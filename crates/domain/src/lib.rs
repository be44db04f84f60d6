//! rootwalk domain layer: DNS message types, the wire codec, the error
//! taxonomy and configuration. Nothing here performs I/O apart from reading
//! the configuration file.
pub mod config;
pub mod dns_message;
pub mod domain_name;
pub mod errors;
pub mod server_pool;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, FailurePolicy, LoggingConfig, ResolverConfig};
pub use dns_message::{
    DnsHeader, DnsMessage, DnsQuestion, DnsResourceRecord, HeaderFlags, MessageType, Opcode,
    RecordData, ResourceClass, ResourceType, ResponseCode,
};
pub use domain_name::validate_domain_name;
pub use errors::{DomainError, WireError};
pub use server_pool::{root_servers, NameServer, ServerPool};
