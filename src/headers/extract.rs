//! Named header extraction with presence policy and type conversion.
//!
//! # Responsibilities
//! - Look up a header by name (case-insensitive)
//! - Apply the required / optional / default policy
//! - Convert the trimmed value to the declared type via `FromStr`
//! - Classify failures as `MissingHeader` or `InvalidFormat`
//!
//! # Design Decisions
//! - Only the first value of a repeated header is considered
//! - Raw string reads go through [`header_str`] and are never trimmed
//! - A blank value is treated as absent by the typed readers

use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderMap;

use crate::headers::HeaderError;

/// What to do when a header is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderPolicy<T> {
    /// Absence is a `MissingHeader` error.
    Required,
    /// Absence yields `None`.
    Optional,
    /// Absence yields the given value.
    Default(T),
}

/// Raw value of `name`, exactly as sent.
///
/// Fails only when the value is not visible ASCII.
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, HeaderError> {
    headers
        .get(name)
        .map(|value| {
            value
                .to_str()
                .map_err(|e| HeaderError::invalid(name, String::from_utf8_lossy(value.as_bytes()), e))
        })
        .transpose()
}

/// Raw value of a header that must be present.
pub fn required_header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, HeaderError> {
    header_str(headers, name)?.ok_or_else(|| HeaderError::missing(name))
}

/// Read `name` from `headers` under `policy`, converting with `FromStr`.
///
/// A blank value counts as absent. Returns `Ok(None)` only for
/// [`HeaderPolicy::Optional`].
pub fn read_header<T>(
    headers: &HeaderMap,
    name: &str,
    policy: HeaderPolicy<T>,
) -> Result<Option<T>, HeaderError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = header_str(headers, name)?.filter(|raw| !raw.trim().is_empty());

    let Some(raw) = raw else {
        return match policy {
            HeaderPolicy::Required => Err(HeaderError::missing(name)),
            HeaderPolicy::Optional => Ok(None),
            HeaderPolicy::Default(default) => Ok(Some(default)),
        };
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| HeaderError::invalid(name, raw, e))
}

/// Read a typed header that must be present.
pub fn required_header<T>(headers: &HeaderMap, name: &str) -> Result<T, HeaderError>
where
    T: FromStr,
    T::Err: Display,
{
    read_header(headers, name, HeaderPolicy::Required)?.ok_or_else(|| HeaderError::missing(name))
}

/// Read a typed header that may be absent.
pub fn optional_header<T>(headers: &HeaderMap, name: &str) -> Result<Option<T>, HeaderError>
where
    T: FromStr,
    T::Err: Display,
{
    read_header(headers, name, HeaderPolicy::Optional)
}

/// Read a typed header, substituting `default` when it is absent.
pub fn header_or_default<T>(headers: &HeaderMap, name: &str, default: T) -> Result<T, HeaderError>
where
    T: FromStr + Clone,
    T::Err: Display,
{
    read_header(headers, name, HeaderPolicy::Default(default.clone()))
        .map(|value| value.unwrap_or(default))
}
