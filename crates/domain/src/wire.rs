//! DNS wire format (RFC 1035 §4).
//!
//! Pure transformations between domain names / query parameters and raw
//! bytes, and between raw bytes and [`DnsMessage`](crate::DnsMessage) values.
//! Nothing in here performs I/O or keeps state between calls.
//!
//! Input handed to the decoders is untrusted network data. Every read is
//! bounds-checked and compression pointers are only followed to strictly
//! earlier offsets, so decoding a name always terminates.

mod bytes;
pub mod decode;
pub mod encode;
pub mod name;
pub mod validate;

pub use decode::{decode_header, decode_message, decode_question_section, decode_resource_section};
pub use encode::{encode_header, encode_query, encode_query_with_rng, encode_question};
pub use name::{decode_label, encode_domain};
pub use validate::validate_response;

pub const HEADER_LEN: usize = 12;
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// QTYPE of the only question this resolver sends (IPv4 host address).
pub const QTYPE_A: u16 = 1;
/// QCLASS Internet.
pub const QCLASS_IN: u16 = 1;
