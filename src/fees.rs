//! Fee and revenue endpoints on `api.llama.fi`.

use crate::request::{LlamaRequest, Service};
use crate::types::params::{DataType, FeeKind, OverviewOptions};
use crate::volumes::{overview_path, overview_query};

fn fee_data_type(data_type: DataType, kind: FeeKind) -> String {
    format!("{data_type}{}", kind.as_str())
}

/// Fees or revenue of every protocol, optionally on one chain.
///
/// *Endpoints: GET /overview/fees, GET /overview/fees/{chain}*
pub fn overview(chain: Option<&str>, options: OverviewOptions, kind: FeeKind) -> LlamaRequest {
    let request = LlamaRequest::get(Service::Tvl, overview_path("fees", chain));
    overview_query(
        request,
        &options,
        fee_data_type(options.selected_data_type(), kind),
    )
}

/// Fees or revenue of one protocol.
///
/// *Endpoint: GET /summary/fees/{protocol}*
pub fn summary(protocol: &str, data_type: DataType, kind: FeeKind) -> LlamaRequest {
    LlamaRequest::get(Service::Tvl, format!("/summary/fees/{protocol}"))
        .query("dataType", fee_data_type(data_type, kind))
}
