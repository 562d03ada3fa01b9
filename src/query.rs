use crate::params::ParamMap;

use url::form_urlencoded;

/// Parses a query string into a map. A leading `?` is tolerated; the last
/// value wins for a repeated key.
pub fn parse_query_string(search: &str) -> ParamMap {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut query = ParamMap::new();
    for (k, v) in form_urlencoded::parse(search.as_bytes()) {
        query.insert(&k, &*v);
    }
    query
}

/// Serializes a map as an `application/x-www-form-urlencoded` query string
/// without a leading `?`.
pub fn build_query_string(query: &ParamMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in query.iter() {
        serializer.append_pair(k, v);
    }
    serializer.finish()
}

#[test]
fn query_round_trip() {
    let query = parse_query_string("?page=2&tag=rust%20lang");
    assert_eq!(query.get("page"), Some("2"));
    assert_eq!(query.get("tag"), Some("rust lang"));

    assert_eq!(build_query_string(&query), "page=2&tag=rust+lang");
    assert_eq!(parse_query_string(""), ParamMap::new());
}

#[test]
fn query_last_value_wins() {
    let query = parse_query_string("a=1&a=2&b=3");
    assert_eq!(query.get("a"), Some("2"));
    assert_eq!(query.len(), 2);
}
