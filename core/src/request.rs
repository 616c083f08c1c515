//! Request URL construction.
//!
//! # Design
//! `build_url` is pure so URL shape can be tested without a transport.
//! The resource path is joined onto the base path with slash-collapsing,
//! dot-segment-resolving semantics, so a trailing slash on the base is
//! optional. Query pairs are merged with any query already on the base and
//! emitted sorted by key, which keeps output byte-stable across calls.

use std::collections::BTreeMap;

use url::Url;

/// Resolve `resource` under `base` and attach `query`.
///
/// Scheme, credentials, host and port come from `base`. Pairs in `query`
/// override same-named pairs already on `base`. A fragment on `base` is
/// dropped rather than preserved: it is never sent to the server, and
/// resolving a path-plus-query reference against a base URL discards the
/// base fragment the same way.
pub fn build_url<K, V>(base: &Url, resource: &str, query: &[(K, V)]) -> Url
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = base.clone();
    url.set_path(&join_path(base.path(), resource));

    let mut pairs: BTreeMap<String, String> = base.query_pairs().into_owned().collect();
    for (key, value) in query {
        pairs.insert(key.as_ref().to_string(), value.as_ref().to_string());
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter())
            .finish();
        url.set_query(Some(&encoded));
    }
    url.set_fragment(None);
    url
}

/// Join two slash-separated paths into a clean absolute path.
fn join_path(base: &str, resource: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(resource.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}
