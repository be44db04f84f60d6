pub mod resolve;

pub use resolve::{ResolutionLimits, ResolveDomainUseCase};
