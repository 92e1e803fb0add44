//! Request options and URL construction.
//!
//! Options are an ordered, schema-free mapping that is serialized verbatim as
//! an `application/x-www-form-urlencoded` query string.

use serde_json::Value;
use url::form_urlencoded;

/// A single query value. Lists encode as repeated keys (`k=a&k=b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Single(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Single(v)
    }
}

impl From<&String> for QueryValue {
    fn from(v: &String) -> Self {
        QueryValue::Single(v.clone())
    }
}

macro_rules! query_value_from_display {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(v: $t) -> Self {
                QueryValue::Single(v.to_string())
            }
        })*
    };
}

query_value_from_display!(bool, i32, i64, u16, u32, u64, usize, f64);

impl<T: Into<String>> From<Vec<T>> for QueryValue {
    fn from(v: Vec<T>) -> Self {
        QueryValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<&Value> for QueryValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Array(items) => QueryValue::List(items.iter().map(scalar_to_string).collect()),
            other => QueryValue::Single(scalar_to_string(other)),
        }
    }
}

// Nested objects and null have no query-string form; they encode as empty.
fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Per-call request options, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, QueryValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Re-setting a key replaces its value in place.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert a JSON object, keeping its key order. Non-objects yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let mut opts = Options::new();
        for (k, v) in map {
            opts.insert(k.as_str(), v);
        }
        Some(opts)
    }

    /// Form-urlencoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            match value {
                QueryValue::Single(v) => {
                    serializer.append_pair(key, v);
                }
                QueryValue::List(items) => {
                    for v in items {
                        serializer.append_pair(key, v);
                    }
                }
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut opts = Options::new();
        for (k, v) in iter {
            opts.insert(k, v);
        }
        opts
    }
}

/// `<host><path>` plus `?<query>` when there is anything to encode.
pub fn build_url(host: &str, path: &str, options: Option<&Options>) -> String {
    let mut url = format!("{}{}", host.trim_end_matches('/'), path);
    if let Some(opts) = options {
        let query = opts.to_query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
    }
    url
}
