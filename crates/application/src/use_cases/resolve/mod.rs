mod limits;
mod resolve_domain;
mod walk;

pub use limits::ResolutionLimits;
pub use resolve_domain::ResolveDomainUseCase;
