//! Header helpers.

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::{GraphQLError, Result};

/// Build the header set for one call.
///
/// Every name present in `overrides` replaces all default values for that
/// name; other defaults pass through untouched. The content type is always
/// `application/json`. Neither input is modified.
pub fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();

    for name in overrides.keys() {
        let mut values = overrides.get_all(name).iter();
        // keys() yields each name once, so the first value always exists
        let Some(first) = values.next() else {
            continue;
        };
        merged.insert(name, first.clone());
        for value in values {
            merged.append(name, value.clone());
        }
    }

    merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    merged
}

/// Parse `(name, value)` pairs into a multi-valued header map.
///
/// Repeated names keep every value in the order given.
pub fn header_map_from_pairs<I, K, V>(pairs: I) -> Result<HeaderMap>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| GraphQLError::InvalidHeader(format!("{}: {}", name.as_ref(), e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| GraphQLError::InvalidHeader(format!("{}: {}", name, e)))?;
        headers.append(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
        headers
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_defaults_pass_through() {
        let defaults = header_map_from_pairs([("cust-header-key", "cust-header-val")]).unwrap();
        let merged = merge_headers(&defaults, &HeaderMap::new());

        assert_eq!(values(&merged, "cust-header-key"), ["cust-header-val"]);
        assert_eq!(values(&merged, "content-type"), ["application/json"]);
    }

    #[test]
    fn test_override_replaces_all_default_values() {
        let defaults =
            header_map_from_pairs([("x-tag", "a"), ("x-tag", "b"), ("x-keep", "k")]).unwrap();
        let overrides = header_map_from_pairs([("x-tag", "c"), ("x-tag", "d")]).unwrap();

        let merged = merge_headers(&defaults, &overrides);

        assert_eq!(values(&merged, "x-tag"), ["c", "d"]);
        assert_eq!(values(&merged, "x-keep"), ["k"]);
        // inputs untouched
        assert_eq!(values(&defaults, "x-tag"), ["a", "b"]);
    }

    #[test]
    fn test_content_type_cannot_be_overridden() {
        let defaults = header_map_from_pairs([("content-type", "text/plain")]).unwrap();
        let overrides = header_map_from_pairs([("Content-Type", "application/xml")]).unwrap();

        let merged = merge_headers(&defaults, &overrides);

        assert_eq!(values(&merged, "content-type"), ["application/json"]);
    }

    #[test]
    fn test_multi_valued_pairs_keep_order() {
        let headers =
            header_map_from_pairs(vec![("accept", "application/json"), ("accept", "text/html")])
                .unwrap();
        assert_eq!(values(&headers, "accept"), ["application/json", "text/html"]);
    }

    #[test]
    fn test_invalid_header_name() {
        let err = header_map_from_pairs([("bad header", "v")]).unwrap_err();
        assert!(matches!(err, GraphQLError::InvalidHeader(_)));
    }

    #[test]
    fn test_invalid_header_value() {
        let err = header_map_from_pairs([("x-ok", "line\nbreak")]).unwrap_err();
        assert!(matches!(err, GraphQLError::InvalidHeader(_)));
    }
}
