use crate::error::Result;
use crate::matcher::KeyMatcher;
use crate::percent_encode::encode_component_into;
use crate::value::QueryValue;

/// Insert or replace one entry in `text`.
///
/// - no `?` in `text`: `?` and the entry are appended (`"/"` becomes `"/?foo=bar"`)
/// - an entry for `name` exists: exactly that entry is rewritten, keeping its delimiter
/// - otherwise the entry is added at the end of the query, before any fragment
///
/// Names are written as given and never encoded; values are percent-encoded.
pub fn set_one(name: &str, value: impl Into<QueryValue>, text: &str) -> Result<String> {
    let matcher = KeyMatcher::new(name)?;
    let pair = pair_text(name, &value.into());
    Ok(upsert(&matcher, &pair, text))
}

/// Fold [`set_one`] over `entries` in order; each step edits the previous result
pub fn set_many<I, K, V>(entries: I, text: &str) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    entries
        .into_iter()
        .try_fold(text.to_string(), |acc, (name, value)| {
            set_one(name.as_ref(), value, &acc)
        })
}

/// Fold [`set_one`] over bare names, writing each as a flag entry
pub fn set_flags<I, K>(names: I, text: &str) -> Result<String>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    set_many(
        names.into_iter().map(|name| (name, QueryValue::Flag)),
        text,
    )
}

/// `name` or `name=encoded-value`
pub(crate) fn pair_text(name: &str, value: &QueryValue) -> String {
    match value {
        QueryValue::Flag => name.to_string(),
        QueryValue::Literal(value) => {
            let mut pair = String::with_capacity(name.len() + 1 + value.len());
            pair.push_str(name);
            pair.push('=');
            encode_component_into(&mut pair, value);
            pair
        }
    }
}

/// Write already-encoded `pair` into `text` for the key `matcher` locates
fn upsert(matcher: &KeyMatcher, pair: &str, text: &str) -> String {
    let Some(question_mark) = memchr::memchr(b'?', text.as_bytes()) else {
        let mut result = String::with_capacity(text.len() + 1 + pair.len());
        result.push_str(text);
        result.push('?');
        result.push_str(pair);
        return result;
    };

    let mut result = String::with_capacity(text.len() + 1 + pair.len());
    if let Some(found) = matcher.find(text) {
        tracing::trace!(pair, at = found.span.start, "replacing query entry");
        result.push_str(&text[..found.span.start]);
        result.push(found.delimiter);
        result.push_str(pair);
        result.push_str(&text[found.span.end..]);
        return result;
    }

    let query_start = question_mark + 1;
    let query_end = memchr::memchr(b'#', &text.as_bytes()[query_start..])
        .map_or(text.len(), |pos| query_start + pos);

    tracing::trace!(pair, "appending query entry");
    result.push_str(&text[..query_end]);
    if query_end > query_start {
        result.push('&');
    }
    result.push_str(pair);
    result.push_str(&text[query_end..]);
    result
}
