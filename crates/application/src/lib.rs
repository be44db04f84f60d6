//! rootwalk application layer: the iterative resolution use case, written
//! against the [`ports::NameserverTransport`] port.
pub mod ports;
pub mod use_cases;
