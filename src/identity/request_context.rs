use super::{CorrelationId, Principal};

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub principal: Principal,
    pub request_id: CorrelationId,
}

impl RequestContext {
    pub fn new(principal: Principal, request_id: Option<&str>) -> Self {
        Self { principal, request_id: CorrelationId::from_opt_str(request_id) }
    }
}
