use std::borrow::Cow;

/// Supplier of the environment's current query, consulted when a call omits its text.
///
/// The returned string is what a browser would expose as `location.search`: the
/// query with its leading `?`, or an empty string when there is none.
pub trait QuerySource {
    fn current_query(&self) -> String;
}

/// Headless environment: there is never a current query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSource;

impl QuerySource for NoSource {
    fn current_query(&self) -> String {
        String::new()
    }
}

/// Default variable read by [`EnvSource`] (CGI convention)
pub const DEFAULT_QUERY_VAR: &str = "QUERY_STRING";

/// Current query taken from an environment variable.
///
/// CGI servers pass the query without `?`, so a non-empty value gets one prepended.
/// An unset or non-UTF-8 variable reads as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSource {
    var: Cow<'static, str>,
}

impl EnvSource {
    pub fn new(var: impl Into<Cow<'static, str>>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_VAR)
    }
}

impl QuerySource for EnvSource {
    fn current_query(&self) -> String {
        std::env::var(&*self.var).map_or_else(|_| String::new(), as_search)
    }
}

/// Normalize a raw query to `location.search` form
fn as_search(raw: String) -> String {
    if raw.is_empty() || raw.starts_with('?') {
        raw
    } else {
        let mut search = String::with_capacity(raw.len() + 1);
        search.push('?');
        search.push_str(&raw);
        search
    }
}

impl QuerySource for String {
    fn current_query(&self) -> String {
        self.clone()
    }
}

impl QuerySource for &'static str {
    fn current_query(&self) -> String {
        (*self).to_string()
    }
}

impl<F> QuerySource for F
where
    F: Fn() -> String,
{
    fn current_query(&self) -> String {
        self()
    }
}

/// Pick the text an operation works on.
/// Explicit text (an empty string included) is used as-is; `None` asks the source.
pub fn resolve<'a, S>(text: Option<&'a str>, source: &S) -> Cow<'a, str>
where
    S: QuerySource + ?Sized,
{
    match text {
        Some(text) => Cow::Borrowed(text),
        None => {
            let current = source.current_query();
            tracing::trace!(current = %current, "no text given, using current query");
            Cow::Owned(current)
        }
    }
}
