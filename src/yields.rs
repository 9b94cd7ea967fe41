//! Yield pool endpoints on `yields.llama.fi`.
//!
//! Both endpoints unwrap the `data` envelope.

use crate::request::{LlamaRequest, Service};

const DATA_FIELD: &str = "data";

/// Every tracked pool with its current APY and TVL.
///
/// *Endpoint: GET /pools*
pub fn pools() -> LlamaRequest {
    LlamaRequest::get(Service::Yields, "/pools").unwrap_field(DATA_FIELD)
}

/// Historical APY and TVL of one pool, addressed by its pool id.
///
/// *Endpoint: GET /chart/{pool}*
pub fn pool_chart(pool: &str) -> LlamaRequest {
    LlamaRequest::get(Service::Yields, format!("/chart/{pool}")).unwrap_field(DATA_FIELD)
}
