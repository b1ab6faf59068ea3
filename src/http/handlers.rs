//! Header endpoint handlers.
//!
//! Each handler demonstrates one way of reading request headers:
//! required vs optional, single vs multi-valued, typed vs raw string,
//! and default substitution. None of them touch shared mutable state.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    Json,
};

use crate::headers::{
    header_or_default, header_str, required_header, required_header_str, HeaderError,
    HostBinding, MultiValueHeaders,
};
use crate::http::server::AppState;

pub const ACCEPT_LANGUAGE: &str = "accept-language";
pub const MY_NUMBER: &str = "my-number";
pub const OPTIONAL_HEADER: &str = "optional-header";

/// `GET /greeting`: echo `accept-language` unmodified.
pub async fn greeting(headers: HeaderMap) -> Result<String, HeaderError> {
    required_header_str(&headers, ACCEPT_LANGUAGE).map(str::to_string)
}

/// `GET /double`: `"<n> * 2 = <2n>"` for the integer in `my-number`.
pub async fn double_number(headers: HeaderMap) -> Result<String, HeaderError> {
    let number: i64 = required_header(&headers, MY_NUMBER)?;
    Ok(format_double(number))
}

// Widened so the product is exact for every i64.
fn format_double(number: i64) -> String {
    format!("{} * 2 = {}", number, i128::from(number) * 2)
}

/// `GET /listHeaders`: every header with its first value.
pub async fn list_all_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(MultiValueHeaders::from_header_map(&headers).first_values())
}

/// `GET /multiValue`: number of distinct header names.
///
/// The full multi-valued map goes to the diagnostics sink.
pub async fn multi_value(State(state): State<AppState>, headers: HeaderMap) -> Json<usize> {
    let headers = MultiValueHeaders::from_header_map(&headers);
    state.diagnostics.multi_value_headers(&headers);
    Json(headers.len())
}

/// `GET /getBaseUrl`: `"Base URL = http://host:port"`.
pub async fn base_url(headers: HeaderMap, uri: Uri) -> Result<String, HeaderError> {
    let binding = HostBinding::resolve(&headers, &uri)?;
    Ok(format!("Base URL = {}", binding.base_url()))
}

/// `GET /nonRequiredHeader`
pub async fn non_required_header(headers: HeaderMap) -> Result<String, HeaderError> {
    let present = header_str(&headers, OPTIONAL_HEADER)?.is_some();
    Ok(format!(
        "Was the optional header present? {}!",
        if present { "Yes" } else { "No" }
    ))
}

/// `GET /default`
pub async fn default_header(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<String, HeaderError> {
    let value = header_or_default(&headers, OPTIONAL_HEADER, state.api.optional_header_default)?;
    Ok(format!("Optional Header is {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(10), "10 * 2 = 20");
        assert_eq!(format_double(-7), "-7 * 2 = -14");
        assert_eq!(format_double(0), "0 * 2 = 0");
    }

    #[test]
    fn test_format_double_is_exact_at_the_edges() {
        for n in [i64::MAX, i64::MIN, i64::MAX / 2 + 1, -1, 1] {
            let expected = format!("{} * 2 = {}", n, (n as i128) * 2);
            assert_eq!(format_double(n), expected);
        }
        assert_eq!(
            format_double(i64::MAX),
            "9223372036854775807 * 2 = 18446744073709551614"
        );
    }
}
