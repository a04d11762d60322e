/// Split input at the first `?`
/// Returns (`prefix`, `query_without_question_mark`)
/// Any later `?` stays inside the query untouched
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune fragment (#hash) from a query string
/// Returns (`query_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(query: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', query.as_bytes()).map_or((query, None), |pos| {
        (&query[..pos], Some(&query[pos + 1..]))
    })
}

/// Iterate over the non-empty `&`-separated segments of a query (fragment already pruned)
pub fn entry_segments(query: &str) -> impl Iterator<Item = &str> {
    query.split('&').filter(|segment| !segment.is_empty())
}

/// Name part of a segment: everything before its first `=`
pub fn entry_name(segment: &str) -> &str {
    memchr::memchr(b'=', segment.as_bytes()).map_or(segment, |pos| &segment[..pos])
}
