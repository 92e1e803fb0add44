//! # newsapi-rs
//!
//! News API 的异步客户端，支持 future 与回调两种调用方式。
//!
//! Async client for the [News API](https://newsapi.org).
//!
//! ## Overview
//!
//! Each endpoint method builds a query URL, sends one GET (with the API key in
//! the `X-Api-Key` header where the endpoint needs it), parses the JSON body and
//! returns either the whole response or an error. A body with
//! `"status": "error"` becomes an [`Error::Api`] carrying the remote `code` and
//! `message`.
//!
//! Every method returns a future. Passing a callback as well starts the request
//! right away and reports the outcome through the callback; the future then
//! settles with the same outcome.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use newsapi_rs::{NewsApi, Options};
//!
//! #[tokio::main]
//! async fn main() -> newsapi_rs::Result<()> {
//!     let client = NewsApi::new("your-api-key")?;
//!
//!     let opts = Options::new().set("q", "bitcoin").set("pageSize", 5);
//!     let response = client.v2().everything(opts).await?;
//!     println!("{}", response["totalResults"]);
//!
//!     // Callback style: the request starts immediately.
//!     let _ = client.v2().top_headlines(newsapi_rs::CallArgs::callback(|res| match res {
//!         Ok(data) => println!("{} headlines", data["articles"].as_array().map_or(0, |a| a.len())),
//!         Err(e) => eprintln!("{e}"),
//!     }));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `NewsApi` facade, builder, argument handling, dispatch |
//! | [`query`] | Request options and URL construction |
//! | [`transport`] | HTTP transport over `reqwest` |
//! | [`error`] | Error types |
//! | [`error_code`] | Classification of remote error codes |

pub mod client;
pub mod error;
pub mod error_code;
pub mod query;
pub mod transport;

pub use client::{Arg, CallArgs, Callback, CompletionSink, Delivery, Endpoint, NewsApi, NewsApiBuilder};
pub use error::{Error, NewsApiError};
pub use error_code::ErrorCode;
pub use query::{Options, QueryValue};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed `Send` future resolving to a library `Result`.
pub type BoxFuture<T> = futures::future::BoxFuture<'static, Result<T>>;

/// What every endpoint method returns: the parsed JSON response.
pub type ResponseFuture = BoxFuture<serde_json::Value>;
