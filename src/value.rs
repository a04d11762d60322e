/// Value written for a query entry.
///
/// A [`QueryValue::Flag`] writes the bare name (`?foo`), a [`QueryValue::Literal`]
/// writes `name=value` with the value percent-encoded.
///
/// Conversions decide which one a Rust value becomes:
/// - strings: empty is a flag, anything else is literal
/// - `bool` and `None`: always a flag
/// - integers: always literal, `0` included
/// - floats: `NaN` is a flag, infinities become `Infinity` and `-Infinity`,
///   whole numbers print without a fractional part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryValue {
    #[default]
    Flag,
    Literal(String),
}

impl QueryValue {
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Flag
        } else {
            Self::Literal(value.to_string())
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::Flag
        } else {
            Self::Literal(value)
        }
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<bool> for QueryValue {
    fn from(_: bool) -> Self {
        Self::Flag
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Flag, Into::into)
    }
}

macro_rules! literal_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_string())
                }
            }
        )*
    };
}

literal_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for QueryValue {
    #[allow(clippy::float_cmp)]
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::Flag;
        }
        if value.is_infinite() {
            let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
            return Self::Literal(text.to_string());
        }
        // Display prints negative zero as "-0"
        if value == 0.0 {
            return Self::Literal("0".to_string());
        }
        Self::Literal(value.to_string())
    }
}

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

/// Result of reading one key: `false`, `true` or the decoded value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// No entry for the key
    Absent,
    /// The key is present without a value (`?foo` or `?foo=`)
    Flag,
    /// The key is present with a decoded, non-empty value
    Value(String),
}

impl Lookup {
    /// Whether the key is present, with or without a value
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Flag => None,
        }
    }
}

impl From<Lookup> for Option<String> {
    fn from(lookup: Lookup) -> Self {
        match lookup {
            Lookup::Value(value) => Some(value),
            Lookup::Absent | Lookup::Flag => None,
        }
    }
}

/// Name to [`Lookup`] mapping in insertion order.
///
/// Names are kept exactly as given; inserting an equal name again overwrites the
/// value in its original position. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct QueryMap {
    entries: Vec<(String, Lookup)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: &str, lookup: Lookup) {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| k == name) {
            *slot = lookup;
        } else {
            self.entries.push((name.to_string(), lookup));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Lookup> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, lookup)| lookup)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Lookup)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for QueryMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, lookup)| other.get(name) == Some(lookup))
    }
}

impl Eq for QueryMap {}

impl<K: AsRef<str>> FromIterator<(K, Lookup)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, Lookup)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, lookup) in iter {
            map.insert(name.as_ref(), lookup);
        }
        map
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, Lookup);
    type IntoIter = std::vec::IntoIter<(String, Lookup)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
