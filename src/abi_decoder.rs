//! Signature decoding endpoints on `abi-decoder.llama.fi`.
//!
//! Function signatures are the 4-byte selector (`0x23b872dd`); event
//! signatures are the full 32-byte topic hash.

use crate::encoding::encode_list;
use crate::request::{LlamaRequest, Service};

/// ABI of function and, optionally, event signatures.
///
/// *Endpoint: GET /fetch/signature*
///
/// ```
/// use defillama::abi_decoder;
///
/// let request = abi_decoder::signature_abi(&["0x23b872dd", "0x18fccc76"], None);
/// assert_eq!(
///     request.path_and_query(),
///     "/fetch/signature?functions=0x23b872dd,0x18fccc76"
/// );
/// ```
pub fn signature_abi<S: AsRef<str>>(functions: &[S], events: Option<&[S]>) -> LlamaRequest {
    LlamaRequest::get(Service::AbiDecoder, "/fetch/signature")
        .query("functions", encode_list(functions))
        .query_opt("events", events.map(encode_list))
}

/// ABI of signatures as verified on a specific contract.
///
/// *Endpoint: GET /fetch/contract/{chain}/{address}*
pub fn contract_signature_abi<S: AsRef<str>>(
    chain: &str,
    address: &str,
    functions: &[S],
    events: Option<&[S]>,
) -> LlamaRequest {
    LlamaRequest::get(
        Service::AbiDecoder,
        format!("/fetch/contract/{chain}/{address}"),
    )
    .query("functions", encode_list(functions))
    .query_opt("events", events.map(encode_list))
}
