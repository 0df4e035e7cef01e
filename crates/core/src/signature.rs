use std::collections::BTreeSet;

use crate::method::Method;

/// Identity of a documented call.
///
/// Two requests with the same role, method, URL and *set* of query-string
/// key names are duplicates, regardless of query values or body. The first
/// representative example wins; later structural duplicates are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestSignature {
    role: String,
    method: Method,
    url: String,
    query_keys: Option<BTreeSet<String>>,
}

impl RequestSignature {
    pub fn new(
        role: impl Into<String>,
        method: Method,
        url: impl Into<String>,
        query_string: Option<&[(String, String)]>,
    ) -> Self {
        Self {
            role: role.into(),
            method,
            url: url.into(),
            query_keys: query_string.map(|qs| qs.iter().map(|(key, _)| key.clone()).collect()),
        }
    }
}
