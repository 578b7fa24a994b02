//! Query parameters for collection endpoints (`GET /profiles`, `GET /events`).
//!
//! Each [`Param`] sets exactly one query key on a [`QueryParams`] collection.
//! Params apply in the order given and assign rather than append, so a later
//! param overrides a key set by an earlier one.

pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// A single query parameter for a collection request.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// `page[size]`, clamped into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
    PageSize(i64),
    /// `page[cursor]` from a previous page's `links.next`.
    PageCursor(String),
    /// `fields[<resource>]` sparse fieldset. An empty list sets nothing.
    Fields(Vec<String>),
    /// `filter`, e.g. `equals(email,"sarah.mason@klaviyo-demo.com")`.
    Filter(String),
    /// `sort`, e.g. `-created`.
    Sort(String),
}

impl Param {
    pub fn page_size(size: i64) -> Self {
        Param::PageSize(size)
    }

    pub fn default_page_size() -> Self {
        Param::PageSize(DEFAULT_PAGE_SIZE)
    }

    pub fn page_cursor(cursor: impl Into<String>) -> Self {
        Param::PageCursor(cursor.into())
    }

    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Param::Fields(names.into_iter().map(Into::into).collect())
    }

    pub fn filter(expr: impl Into<String>) -> Self {
        Param::Filter(expr.into())
    }

    pub fn sort(field: impl Into<String>) -> Self {
        Param::Sort(field.into())
    }

    /// Sets this param's key on `query`. `resource` is the JSON:API type the
    /// endpoint returns; it scopes the sparse fieldset key.
    pub fn apply(&self, resource: &str, query: &mut QueryParams) {
        match self {
            Param::PageSize(size) => {
                let clamped = (*size).clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
                query.set("page[size]", clamped.to_string());
            }
            Param::PageCursor(cursor) => query.set("page[cursor]", cursor.clone()),
            Param::Fields(names) => {
                if !names.is_empty() {
                    query.set(format!("fields[{}]", resource), names.join(","));
                }
            }
            Param::Filter(expr) => query.set("filter", expr.clone()),
            Param::Sort(field) => query.set("sort", field.clone()),
        }
    }
}

/// Ordered query-string collection with assignment semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `params` in order for an endpoint returning `resource`.
    pub fn from_params(resource: &str, params: &[Param]) -> Self {
        let mut query = Self::new();
        for param in params {
            param.apply(resource, &mut query);
        }
        query
    }

    /// Sets `key`, replacing any existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// URL-encodes the collection (`page%5Bsize%5D=20&...`).
    pub fn encode(&self) -> String {
        // Serializing a slice of string pairs cannot fail.
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }
}
