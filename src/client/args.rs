//! Argument normalization for endpoint methods.
//!
//! Every endpoint method accepts up to two positional arguments in one of the
//! shapes `(options, callback)`, `(options)`, `(callback)` or `()`. This module
//! resolves them into an optional options map and an optional callback.

use super::sink::Callback;
use crate::query::Options;
use crate::Error;
use serde_json::Value;
use tracing::warn;

/// One positional argument.
#[derive(Debug)]
pub enum Arg {
    Options(Options),
    /// Untyped value; used as options when it is a JSON object.
    Json(Value),
    Callback(Callback),
}

impl Arg {
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(std::result::Result<&Value, &Error>) + Send + 'static,
    {
        Arg::Callback(Callback::new(f))
    }

    fn into_options(self) -> Option<Options> {
        match self {
            Arg::Options(opts) => Some(opts),
            Arg::Json(value) => Options::from_json(&value),
            Arg::Callback(_) => None,
        }
    }

    fn into_callback(self) -> Option<Callback> {
        match self {
            Arg::Callback(cb) => Some(cb),
            _ => None,
        }
    }
}

impl From<Options> for Arg {
    fn from(opts: Options) -> Self {
        Arg::Options(opts)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Json(value)
    }
}

impl From<Callback> for Arg {
    fn from(cb: Callback) -> Self {
        Arg::Callback(cb)
    }
}

/// The positional arguments of one endpoint call.
#[derive(Debug, Default)]
pub struct CallArgs {
    args: Vec<Arg>,
}

impl CallArgs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn options(options: Options) -> Self {
        Self::from_args([Arg::Options(options)])
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(std::result::Result<&Value, &Error>) + Send + 'static,
    {
        Self::from_args([Arg::callback(f)])
    }

    pub fn with_callback<F>(options: Options, f: F) -> Self
    where
        F: FnOnce(std::result::Result<&Value, &Error>) + Send + 'static,
    {
        Self::from_args([Arg::Options(options), Arg::callback(f)])
    }

    /// Raw positional form. Arguments past the second are ignored.
    pub fn from_args(args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn normalize(self) -> Normalized {
        normalize(self.args)
    }
}

impl From<()> for CallArgs {
    fn from(_: ()) -> Self {
        CallArgs::none()
    }
}

impl From<Options> for CallArgs {
    fn from(options: Options) -> Self {
        CallArgs::options(options)
    }
}

impl From<Value> for CallArgs {
    fn from(value: Value) -> Self {
        CallArgs::from_args([Arg::Json(value)])
    }
}

impl From<Callback> for CallArgs {
    fn from(cb: Callback) -> Self {
        CallArgs::from_args([Arg::Callback(cb)])
    }
}

impl From<Vec<Arg>> for CallArgs {
    fn from(args: Vec<Arg>) -> Self {
        CallArgs::from_args(args)
    }
}

/// Resolved `(options, callback)` pair.
#[derive(Debug, Default)]
pub struct Normalized {
    pub options: Option<Options>,
    pub callback: Option<Callback>,
}

/// Resolve positional arguments into options and callback.
///
/// A lone argument that is neither a mapping nor a callback resolves to
/// nothing at all; callers get the endpoint's defaults.
pub fn normalize(args: Vec<Arg>) -> Normalized {
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (None, _) => Normalized::default(),
        (Some(first), Some(second)) => Normalized {
            options: first.into_options(),
            callback: second.into_callback(),
        },
        (Some(Arg::Callback(cb)), None) => Normalized {
            options: None,
            callback: Some(cb),
        },
        (Some(single), None) => {
            let options = single.into_options();
            if options.is_none() {
                warn!("ignoring argument that is neither an options map nor a callback");
            }
            Normalized {
                options,
                callback: None,
            }
        }
    }
}
