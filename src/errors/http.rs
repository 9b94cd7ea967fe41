// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for HTTP exchanges with the DefiLlama API.
//!
//! The API is trusted to answer with JSON. Status codes are not inspected:
//! a 4xx/5xx answer with a JSON body decodes like any other, and a non-JSON
//! body surfaces as [`HttpError::Decode`] with the status attached for context.

/// Errors that can occur while sending a request and decoding its response.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    Client {
        /// The underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response body.
    ///
    /// Covers DNS failures, refused connections, TLS errors and a configured
    /// timeout elapsing.
    #[error("Request to {url} failed")]
    Transport {
        /// URL that was requested
        url: String,
        /// The underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("Response from {url} (status {status}) is not valid JSON")]
    Decode {
        /// URL that was requested
        url: String,
        /// HTTP status code of the response
        status: u16,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The response did not contain the field the endpoint unwraps.
    #[error("Response from {url} has no `{field}` field")]
    MissingField {
        /// URL that was requested
        url: String,
        /// Name of the expected top-level field
        field: &'static str,
    },
}

impl HttpError {
    /// Helper to create a `Client` error.
    pub fn client(source: reqwest::Error) -> Self {
        HttpError::Client { source }
    }

    /// Helper to create a `Transport` error for a URL.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        HttpError::Transport {
            url: url.into(),
            source,
        }
    }

    /// Helper to create a `Decode` error for a URL and status code.
    pub fn decode(url: impl Into<String>, status: u16, source: serde_json::Error) -> Self {
        HttpError::Decode {
            url: url.into(),
            status,
            source,
        }
    }

    /// Helper to create a `MissingField` error.
    pub fn missing_field(url: impl Into<String>, field: &'static str) -> Self {
        HttpError::MissingField {
            url: url.into(),
            field,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Decode { status, .. } => Some(*status),
            HttpError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
