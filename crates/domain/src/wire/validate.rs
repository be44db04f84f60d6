use crate::dns_message::DnsMessage;
use crate::errors::DomainError;

/// Checks that `response` answers `query`: it must be a response and carry
/// the query's id. Structural problems are caught earlier, by the decoder.
pub fn validate_response(response: &DnsMessage, query: &DnsMessage) -> Result<(), DomainError> {
    if !response.is_response() {
        return Err(DomainError::NotAResponse);
    }
    if response.header.id != query.header.id {
        return Err(DomainError::IdMismatch {
            expected: query.header.id,
            actual: response.header.id,
        });
    }
    Ok(())
}
