//! Multi-valued view of the request header map.

use std::collections::BTreeMap;
use std::fmt;

use axum::http::HeaderMap;
use serde::Serialize;

/// All values sent for one header name, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderValues(Vec<String>);

impl HeaderValues {
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Header name → every value sent under that name.
///
/// Names are lowercase and keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiValueHeaders {
    entries: Vec<(String, HeaderValues)>,
}

impl MultiValueHeaders {
    pub fn from_header_map(headers: &HeaderMap) -> Self {
        let entries = headers
            .keys()
            .map(|name| {
                let values = headers
                    .get_all(name)
                    .iter()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .collect();
                (name.as_str().to_string(), HeaderValues(values))
            })
            .collect();

        Self { entries }
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&HeaderValues> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, values)| values)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValues)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Collapse to one value per name, keeping the first.
    pub fn first_values(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|(name, values)| values.first().map(|v| (name.clone(), v.to_string())))
            .collect()
    }
}

impl Serialize for MultiValueHeaders {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl fmt::Display for MultiValueHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=[", name)?;
            for (j, value) in values.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn sample() -> HeaderMap {
        let mut map = HeaderMap::new();
        map.append("x-multi", HeaderValue::from_static("a"));
        map.append("x-single", HeaderValue::from_static("1"));
        map.append("x-multi", HeaderValue::from_static("b"));
        map.append("X-Multi", HeaderValue::from_static("c"));
        map
    }

    #[test]
    fn test_counts_distinct_names() {
        let headers = MultiValueHeaders::from_header_map(&sample());
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("x-multi").map(HeaderValues::len), Some(3));
        assert_eq!(headers.get("X-SINGLE").and_then(HeaderValues::first), Some("1"));
    }

    #[test]
    fn test_first_values() {
        let headers = MultiValueHeaders::from_header_map(&sample());
        let first = headers.first_values();
        assert_eq!(first.len(), 2);
        assert_eq!(first["x-multi"], "a");
        assert_eq!(first["x-single"], "1");
    }

    #[test]
    fn test_display_and_json() {
        let headers = MultiValueHeaders::from_header_map(&sample());
        assert_eq!(headers.to_string(), "{x-multi=[a, b, c], x-single=[1]}");

        let json = serde_json::to_value(&headers).unwrap();
        assert_eq!(json, serde_json::json!({"x-multi": ["a", "b", "c"], "x-single": ["1"]}));
    }

    #[test]
    fn test_empty() {
        let headers = MultiValueHeaders::from_header_map(&HeaderMap::new());
        assert!(headers.is_empty());
        assert!(headers.first_values().is_empty());
    }
}
