//! Query-string construction shared by every resource module.
//!
//! Encoding rules, uniform across resources:
//! - absent (`None`) fields never appear in the output;
//! - strings and closed enums are appended verbatim;
//! - numbers and booleans via `to_string` (`"true"` / `"false"`);
//! - timestamps per an explicit [`DateFormat`] chosen by each builder —
//!   RFC 3339 for most resources, calendar dates for the statistics family;
//! - slices repeat the key once per element, never comma-joined.
//!
//! Output carries no leading `?`. Key order is the insertion order of the
//! builder's own field checks and is not a contract guarantee.

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

/// Wire format for a date-valued query parameter.
///
/// The statistics endpoints require the calendar form; everything else
/// takes full timestamps. The divergence is intentional and per-endpoint,
/// so the format is a parameter on every date push rather than a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// RFC 3339 with millisecond precision and `Z` suffix.
    #[default]
    Iso8601,
    /// Zero-padded `YYYY-MM-DD`.
    CalendarDate,
}

impl DateFormat {
    pub fn encode(self, value: &DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => value.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::CalendarDate => value.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Accumulates key/value pairs and serializes them form-urlencoded.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter when the value is present.
    pub fn opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_owned(), value.to_string()));
        }
        self
    }

    /// Append a date parameter in the given wire format.
    pub fn date(
        &mut self,
        key: &str,
        value: Option<DateTime<Utc>>,
        format: DateFormat,
    ) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_owned(), format.encode(&value)));
        }
        self
    }

    /// Append the key once per element (repeated-key encoding).
    pub fn repeated<V: ToString>(&mut self, key: &str, values: Option<&[V]>) -> &mut Self {
        if let Some(values) = values {
            for value in values {
                self.pairs.push((key.to_owned(), value.to_string()));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize to a query string with no leading `?`.
    pub fn finish(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Join a path and a query string, adding `?` only when there is a query.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}
