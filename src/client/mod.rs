//! Public client: the `NewsApi` facade and the machinery behind each call.
//!
//! A call flows facade method → [`args::normalize`] → [`crate::query::build_url`]
//! → [`dispatch::Dispatcher`] → caller (future or callback).

pub mod args;
pub mod builder;
pub mod core;
pub mod dispatch;
pub mod endpoint;
pub mod sink;

pub use args::{Arg, CallArgs, Normalized};
pub use builder::{NewsApiBuilder, DEFAULT_HOST};
pub use self::core::{NewsApi, V2};
pub use dispatch::Dispatcher;
pub use endpoint::Endpoint;
pub use sink::{Callback, CompletionSink, Delivery};
