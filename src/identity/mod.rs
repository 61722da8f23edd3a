//! Who is asking: principal attributes and per-request correlation.

mod principal;
mod correlation;
mod request_context;

pub use principal::Principal;
pub use correlation::CorrelationId;
pub use request_context::RequestContext;
