//! Query string and path construction
//!
//! Optional query fields go through a rule table: each rule names the key
//! and a function deciding whether the field is included and how it is
//! serialized. A field that yields `None` is left off the wire entirely,
//! never sent as an empty string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

use crate::domain::models::ListOptions;

/// Characters escaped in path segments; matches `encodeURIComponent`
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One optional query parameter: key, inclusion predicate and serialization
pub struct QueryRule<T> {
    /// Query key
    pub key: &'static str,
    /// `Some(value)` to include the key, `None` to omit it
    pub value: fn(&T) -> Option<String>,
}

fn list_recursive(opts: &ListOptions) -> Option<String> {
    opts.recursive.then(|| "true".to_string())
}

fn list_limit(opts: &ListOptions) -> Option<String> {
    opts.limit.filter(|limit| *limit != 0).map(|limit| limit.to_string())
}

fn list_mime(opts: &ListOptions) -> Option<String> {
    opts.mime
        .as_deref()
        .filter(|mime| !mime.is_empty())
        .map(str::to_string)
}

/// Optional parameters of `GET /v1/pfs/list`, in wire order
pub const LIST_RULES: [QueryRule<ListOptions>; 3] = [
    QueryRule {
        key: "recursive",
        value: list_recursive,
    },
    QueryRule {
        key: "limit",
        value: list_limit,
    },
    QueryRule {
        key: "mime",
        value: list_mime,
    },
];

/// Form-urlencoded query builder (`URLSearchParams` encoding)
pub struct QueryBuilder {
    serializer: form_urlencoded::Serializer<'static, String>,
}

impl QueryBuilder {
    /// Start an empty query
    pub fn new() -> Self {
        Self {
            serializer: form_urlencoded::Serializer::new(String::new()),
        }
    }

    /// Append a parameter that is always sent
    #[must_use]
    pub fn required(mut self, key: &str, value: &str) -> Self {
        self.serializer.append_pair(key, value);
        self
    }

    /// Append every rule whose predicate accepts `source`
    #[must_use]
    pub fn optional<T>(mut self, rules: &[QueryRule<T>], source: &T) -> Self {
        for rule in rules {
            if let Some(value) = (rule.value)(source) {
                self.serializer.append_pair(rule.key, &value);
            }
        }
        self
    }

    /// Join `path` and the encoded query with `?`
    pub fn into_path(mut self, path: &str) -> String {
        let query = self.serializer.finish();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode a single path segment
pub fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_path(prefix: &str, opts: &ListOptions) -> String {
        QueryBuilder::new()
            .required("prefix", prefix)
            .optional(&LIST_RULES, opts)
            .into_path("/v1/pfs/list")
    }

    #[test]
    fn test_defaults_send_only_prefix() {
        assert_eq!(list_path("foo", &ListOptions::default()), "/v1/pfs/list?prefix=foo");
    }

    #[test]
    fn test_all_options_in_rule_order() {
        let opts = ListOptions::default().with_mime("text/plain").with_limit(5).recursive();
        assert_eq!(
            list_path("foo", &opts),
            "/v1/pfs/list?prefix=foo&recursive=true&limit=5&mime=text%2Fplain"
        );
    }

    #[test]
    fn test_falsy_values_are_omitted() {
        let opts = ListOptions {
            recursive: false,
            limit: Some(0),
            mime: Some(String::new()),
        };
        assert_eq!(list_path("foo", &opts), "/v1/pfs/list?prefix=foo");
    }

    #[test]
    fn test_required_values_use_form_encoding() {
        let path = QueryBuilder::new()
            .required("prefix", "pfs://mail/a b&c")
            .into_path("/v1/pfs/list");
        assert_eq!(path, "/v1/pfs/list?prefix=pfs%3A%2F%2Fmail%2Fa+b%26c");
    }

    #[test]
    fn test_empty_query_has_no_separator() {
        assert_eq!(QueryBuilder::new().into_path("/v1/p2p/queue"), "/v1/p2p/queue");
    }

    #[test]
    fn test_escape_path_segment() {
        assert_eq!(escape_path_segment("a b"), "a%20b");
        assert_eq!(escape_path_segment("x/y?z#"), "x%2Fy%3Fz%23");
        assert_eq!(escape_path_segment("job-1_2.3~!*'()"), "job-1_2.3~!*'()");
        assert_eq!(escape_path_segment("zażółć"), "za%C5%BC%C3%B3%C5%82%C4%87");
    }
}
