use crate::error::Result;
use crate::helpers::{entry_name, entry_segments, prune_fragment, split_query};
use crate::matcher::KeyMatcher;
use crate::percent_encode::decode_component;
use crate::value::{Lookup, QueryMap};

/// Read one key from `text`.
///
/// Returns [`Lookup::Absent`] when there is no entry, [`Lookup::Flag`] when the entry
/// has no value or an empty one, and the percent-decoded value otherwise.
/// The first matching entry wins; names compare case-insensitively.
pub fn get_one(name: &str, text: &str) -> Result<Lookup> {
    let matcher = KeyMatcher::new(name)?;
    lookup(&matcher, text)
}

pub(crate) fn lookup(matcher: &KeyMatcher, text: &str) -> Result<Lookup> {
    let Some(found) = matcher.find(text) else {
        return Ok(Lookup::Absent);
    };

    match found.raw_value {
        None | Some("") => Ok(Lookup::Flag),
        Some(raw) => decode_component(raw)
            .map(Lookup::Value)
            .inspect_err(|err| tracing::debug!(%err, raw, "failed to decode query value")),
    }
}

/// Read several keys from the same text; the map is keyed by the names as given
pub fn get_many<I, K>(names: I, text: &str) -> Result<QueryMap>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut map = QueryMap::new();
    for name in names {
        let name = name.as_ref();
        map.insert(name, get_one(name, text)?);
    }
    Ok(map)
}

/// Read every key present in the query part of `text`.
///
/// Names keep the case they have in the text. When a name repeats, later entries
/// resolve to the first occurrence. Empty segments and the fragment are ignored.
pub fn get_all(text: &str) -> Result<QueryMap> {
    get_many(query_names(text), text)
}

/// Names of the entries in the query part of `text`, left to right
pub(crate) fn query_names(text: &str) -> Vec<&str> {
    let (_, Some(query)) = split_query(text) else {
        return Vec::new();
    };
    let (query, _) = prune_fragment(query);

    entry_segments(query)
        .map(entry_name)
        .filter(|name| !name.is_empty())
        .collect()
}
