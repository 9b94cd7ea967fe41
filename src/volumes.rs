//! DEX and options volume endpoints on `api.llama.fi`.
//!
//! Overviews list every protocol (optionally on one chain); summaries cover a
//! single protocol. The `dataType` query value is composed from the
//! requested [`DataType`] and, for options, the [`OptionsVolume`] kind.

use crate::request::{LlamaRequest, Service};
use crate::types::params::{DataType, OptionsVolume, OverviewOptions};

/// Attach the overview switches and the `dataType` value, in the order the
/// API documents them.
pub(crate) fn overview_query(
    request: LlamaRequest,
    options: &OverviewOptions,
    data_type: String,
) -> LlamaRequest {
    request
        .query("excludeTotalDataChart", options.excludes_total_data_chart())
        .query(
            "excludeTotalDataChartBreakdown",
            options.excludes_total_data_chart_breakdown(),
        )
        .query("dataType", data_type)
}

/// Path of an overview endpoint, with the chain appended when given.
pub(crate) fn overview_path(kind: &str, chain: Option<&str>) -> String {
    match chain {
        Some(chain) => format!("/overview/{kind}/{chain}"),
        None => format!("/overview/{kind}"),
    }
}

fn dex_data_type(data_type: DataType) -> String {
    format!("{data_type}Volume")
}

fn options_data_type(data_type: DataType, volume: OptionsVolume) -> String {
    format!("{data_type}{}Volume", volume.as_str())
}

/// Volume of every DEX, optionally on one chain.
///
/// *Endpoints: GET /overview/dexs, GET /overview/dexs/{chain}*
///
/// ```
/// use defillama::{volumes, DataType, OverviewOptions};
///
/// let options = OverviewOptions::default()
///     .exclude_total_data_chart(true)
///     .data_type(DataType::Total);
/// assert_eq!(
///     volumes::dex_overview(Some("ethereum"), options).path_and_query(),
///     "/overview/dexs/ethereum?excludeTotalDataChart=true\
///      &excludeTotalDataChartBreakdown=false&dataType=totalVolume"
/// );
/// ```
pub fn dex_overview(chain: Option<&str>, options: OverviewOptions) -> LlamaRequest {
    let request = LlamaRequest::get(Service::Tvl, overview_path("dexs", chain));
    overview_query(request, &options, dex_data_type(options.selected_data_type()))
}

/// Volume summary and history of one DEX.
///
/// *Endpoint: GET /summary/dexs/{protocol}*
pub fn dex_summary(protocol: &str, options: OverviewOptions) -> LlamaRequest {
    let request = LlamaRequest::get(Service::Tvl, format!("/summary/dexs/{protocol}"));
    overview_query(request, &options, dex_data_type(options.selected_data_type()))
}

/// Premium or notional volume of every options protocol, optionally on one
/// chain.
///
/// *Endpoints: GET /overview/options, GET /overview/options/{chain}*
pub fn options_overview(
    chain: Option<&str>,
    options: OverviewOptions,
    volume: OptionsVolume,
) -> LlamaRequest {
    let request = LlamaRequest::get(Service::Tvl, overview_path("options", chain));
    overview_query(
        request,
        &options,
        options_data_type(options.selected_data_type(), volume),
    )
}

/// Premium or notional volume of one options protocol.
///
/// *Endpoint: GET /summary/options/{protocol}*
pub fn options_summary(protocol: &str, data_type: DataType, volume: OptionsVolume) -> LlamaRequest {
    LlamaRequest::get(Service::Tvl, format!("/summary/options/{protocol}"))
        .query("dataType", options_data_type(data_type, volume))
}
