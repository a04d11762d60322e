use crate::error::Result;
use crate::reader;
use crate::remover;
use crate::source::{NoSource, QuerySource, resolve};
use crate::value::{Lookup, QueryMap, QueryValue};
use crate::writer;

/// What [`QueryEngine::get`] should read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Get<'a> {
    One(&'a str),
    Many(&'a [&'a str]),
    All,
}

/// An empty name reads everything
impl<'a> From<&'a str> for Get<'a> {
    fn from(name: &'a str) -> Self {
        if name.is_empty() {
            Self::All
        } else {
            Self::One(name)
        }
    }
}

impl<'a> From<&'a [&'a str]> for Get<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Self::Many(names)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Get<'a> {
    fn from(names: &'a [&'a str; N]) -> Self {
        Self::Many(names)
    }
}

impl<'a> From<Option<&'a str>> for Get<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(Self::All, Self::from)
    }
}

/// Result of [`QueryEngine::get`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    One(Lookup),
    Many(QueryMap),
}

impl Fetched {
    pub fn into_lookup(self) -> Option<Lookup> {
        match self {
            Self::One(lookup) => Some(lookup),
            Self::Many(_) => None,
        }
    }

    pub fn into_map(self) -> Option<QueryMap> {
        match self {
            Self::Many(map) => Some(map),
            Self::One(_) => None,
        }
    }
}

/// What [`QueryEngine::set`] should write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Set<'a> {
    One(&'a str, QueryValue),
    Many(Vec<(&'a str, QueryValue)>),
    Flags(&'a [&'a str]),
}

impl<'a, V: Into<QueryValue>> From<(&'a str, V)> for Set<'a> {
    fn from((name, value): (&'a str, V)) -> Self {
        Self::One(name, value.into())
    }
}

impl<'a> From<&'a [&'a str]> for Set<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Self::Flags(names)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Set<'a> {
    fn from(names: &'a [&'a str; N]) -> Self {
        Self::Flags(names)
    }
}

impl<'a, V: Into<QueryValue>> From<Vec<(&'a str, V)>> for Set<'a> {
    fn from(entries: Vec<(&'a str, V)>) -> Self {
        Self::Many(
            entries
                .into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
        )
    }
}

/// What [`QueryEngine::remove`] should drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remove<'a> {
    One(&'a str),
    Many(&'a [&'a str]),
    All,
}

/// An empty name removes everything
impl<'a> From<&'a str> for Remove<'a> {
    fn from(name: &'a str) -> Self {
        if name.is_empty() {
            Self::All
        } else {
            Self::One(name)
        }
    }
}

impl<'a> From<&'a [&'a str]> for Remove<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Self::Many(names)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Remove<'a> {
    fn from(names: &'a [&'a str; N]) -> Self {
        Self::Many(names)
    }
}

impl<'a> From<Option<&'a str>> for Remove<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(Self::All, Self::from)
    }
}

/// Query string operations bound to a [`QuerySource`].
///
/// Every method takes `text: Option<&str>`. `Some` is used as-is (an empty
/// string included); `None` asks the source for the current query on each call.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine<S = NoSource> {
    source: S,
}

impl QueryEngine<NoSource> {
    pub fn new() -> Self {
        Self { source: NoSource }
    }
}

impl<S: QuerySource> QueryEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_one(&self, name: &str, text: Option<&str>) -> Result<Lookup> {
        reader::get_one(name, &resolve(text, &self.source))
    }

    pub fn get_many<I, K>(&self, names: I, text: Option<&str>) -> Result<QueryMap>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        reader::get_many(names, &resolve(text, &self.source))
    }

    pub fn get_all(&self, text: Option<&str>) -> Result<QueryMap> {
        reader::get_all(&resolve(text, &self.source))
    }

    /// Read one key, several keys or everything
    pub fn get<'a>(&self, what: impl Into<Get<'a>>, text: Option<&str>) -> Result<Fetched> {
        match what.into() {
            Get::One(name) => self.get_one(name, text).map(Fetched::One),
            Get::Many(names) => self.get_many(names, text).map(Fetched::Many),
            Get::All => self.get_all(text).map(Fetched::Many),
        }
    }

    pub fn set_one(
        &self,
        name: &str,
        value: impl Into<QueryValue>,
        text: Option<&str>,
    ) -> Result<String> {
        writer::set_one(name, value, &resolve(text, &self.source))
    }

    pub fn set_many<I, K, V>(&self, entries: I, text: Option<&str>) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<QueryValue>,
    {
        writer::set_many(entries, &resolve(text, &self.source))
    }

    pub fn set_flags<I, K>(&self, names: I, text: Option<&str>) -> Result<String>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        writer::set_flags(names, &resolve(text, &self.source))
    }

    /// Write one entry, several entries or several flags
    pub fn set<'a>(&self, what: impl Into<Set<'a>>, text: Option<&str>) -> Result<String> {
        match what.into() {
            Set::One(name, value) => self.set_one(name, value, text),
            Set::Many(entries) => self.set_many(entries, text),
            Set::Flags(names) => self.set_flags(names, text),
        }
    }

    pub fn remove_one(&self, name: &str, text: Option<&str>) -> Result<String> {
        remover::remove_one(name, &resolve(text, &self.source))
    }

    pub fn remove_many<I, K>(&self, names: I, text: Option<&str>) -> Result<String>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        remover::remove_many(names, &resolve(text, &self.source))
    }

    pub fn remove_all(&self, text: Option<&str>) -> String {
        remover::remove_all(&resolve(text, &self.source))
    }

    /// Remove one key, several keys or the whole query
    pub fn remove<'a>(&self, what: impl Into<Remove<'a>>, text: Option<&str>) -> Result<String> {
        match what.into() {
            Remove::One(name) => self.remove_one(name, text),
            Remove::Many(names) => self.remove_many(names, text),
            Remove::All => Ok(self.remove_all(text)),
        }
    }
}
