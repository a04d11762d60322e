use crate::error::{QueryError, Result};
use core::ops::Range;
use regex::{Regex, RegexBuilder};

/// Case-insensitive locator for one key name.
///
/// An entry is a `?` or `&` delimiter, the key name as literal text, then either
/// `=` and a value running up to the next `&` or `#`, or nothing at all. The entry
/// must end at `&`, `#` or the end of the text, so `foo` does not match `?foobar`.
///
/// The search is not anchored: the first entry anywhere in the text wins. That
/// includes the prefix before the first `?`, so in `/p&b=3?a=1` the key `b` is found
/// at `&b=` with the value `3?a=1`.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    entry: Regex,
    exact: Regex,
}

/// One entry located by a [`KeyMatcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMatch<'t> {
    /// Byte range from the delimiter to the end of the value (terminator excluded)
    pub span: Range<usize>,
    /// The delimiter in front of the name, `?` or `&`
    pub delimiter: char,
    /// Raw (still percent-encoded) value text, `None` when there is no `=`
    pub raw_value: Option<&'t str>,
}

impl KeyMatcher {
    /// Build the matcher for `name`; metacharacters in the name are escaped.
    pub fn new(name: &str) -> Result<Self> {
        let literal = regex::escape(name);
        let entry = build(&format!(
            r"(?P<delimiter>[?&])(?P<name>{literal})(?:=(?P<value>[^&#]*))?(?:[&#]|\z)"
        ))?;
        let exact = build(&format!(r"\A(?:{literal})\z"))?;
        Ok(Self { entry, exact })
    }

    /// Locate the first entry for this key in `text`
    pub fn find<'t>(&self, text: &'t str) -> Option<EntryMatch<'t>> {
        let caps = self.entry.captures(text)?;
        let delimiter = caps.name("delimiter")?;
        let name = caps.name("name")?;
        let value = caps.name("value");

        Some(EntryMatch {
            span: delimiter.start()..value.map_or(name.end(), |v| v.end()),
            delimiter: if delimiter.as_str() == "&" { '&' } else { '?' },
            raw_value: value.map(|v| v.as_str()),
        })
    }

    /// Whether `candidate` is the same key name, compared case-insensitively
    pub fn is_name(&self, candidate: &str) -> bool {
        self.exact.is_match(candidate)
    }
}

fn build(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .inspect_err(|err| tracing::debug!(%err, "failed to compile key matcher"))
        .map_err(|err| QueryError::InvalidKey(err.to_string()))
}
