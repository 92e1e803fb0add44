//! 传输层：基于 reqwest 的单次 HTTP GET。
//!
//! HTTP transport. One `reqwest::Client` per `NewsApi` instance; every call
//! is a single GET whose raw body is handed back for envelope parsing.

pub mod http;

pub use http::{HttpTransport, RawResponse, TransportConfig, TransportError};
