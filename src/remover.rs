use crate::error::Result;
use crate::helpers::{prune_fragment, split_query};
use crate::matcher::KeyMatcher;
use crate::reader::query_names;

/// Remove every entry for `name` (case-insensitive) from `text`.
///
/// The query is rebuilt from the surviving entries in their original order, each
/// keeping its raw value text. Repeated names collapse to their first occurrence.
/// The prefix is copied verbatim. When nothing survives the `?` goes too, and the
/// result is the prefix followed by the fragment, if any (`/?foo=1#top` gives `/#top`).
pub fn remove_one(name: &str, text: &str) -> Result<String> {
    let (prefix, Some(query)) = split_query(text) else {
        return Ok(text.to_string());
    };
    let target = KeyMatcher::new(name)?;
    let (entries, fragment) = prune_fragment(query);

    // "?" plus the entries, without prefix or fragment
    let search = &text[prefix.len()..=prefix.len() + entries.len()];

    let mut result = prefix.to_string();
    let mut emitted: Vec<KeyMatcher> = Vec::new();
    for survivor in query_names(search)
        .into_iter()
        .filter(|candidate| !target.is_name(candidate))
    {
        if emitted.iter().any(|kept| kept.is_name(survivor)) {
            continue;
        }
        let matcher = KeyMatcher::new(survivor)?;
        let Some(found) = matcher.find(search) else {
            continue;
        };
        // entry text as written, delimiter excluded
        let pair = &search[found.span.start + 1..found.span.end];
        result.push(if emitted.is_empty() { '?' } else { '&' });
        result.push_str(pair);
        emitted.push(matcher);
    }

    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }

    tracing::trace!(name, result = %result, "removed query entry");
    Ok(result)
}

/// Fold [`remove_one`] over `names` in order
pub fn remove_many<I, K>(names: I, text: &str) -> Result<String>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    names
        .into_iter()
        .try_fold(text.to_string(), |acc, name| remove_one(name.as_ref(), &acc))
}

/// Drop the whole query: everything from the first `?` on
pub fn remove_all(text: &str) -> String {
    split_query(text).0.to_string()
}
