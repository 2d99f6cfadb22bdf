use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameters in the order they first appeared in the URL.
pub type Query = IndexMap<String, String>;

/// Characters escaped in query keys and values. Matches what browsers leave untouched in a URI
/// component: alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The routed portion of a URL: path, query parameters and fragment.
///
/// A location is replaced wholesale on every navigation, it is never patched in place.
///
/// Two locations describe the same place when their canonical URLs (the [`Display`] output) are
/// equal, see [`LocationState::same_location`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    /// The path segment of the URL, without query or fragment.
    pub path: String,

    /// The decoded query parameters, or `None` when the URL has none.
    #[serde(
        default,
        serialize_with = "absent::serialize",
        deserialize_with = "absent::deserialize_query"
    )]
    pub query: Option<Query>,

    /// The fragment without its leading `#`, or `None` when the URL has none.
    #[serde(
        default,
        serialize_with = "absent::serialize",
        deserialize_with = "absent::deserialize"
    )]
    pub hash: Option<String>,
}

/// Anything a [`LocationState`] can be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationInput {
    /// An existing location, passed through untouched.
    State(LocationState),
    /// An already resolved URL.
    Url(Url),
    /// An href, absolute or relative to the current document.
    Href(String),
}

impl From<LocationState> for LocationInput {
    fn from(state: LocationState) -> Self {
        Self::State(state)
    }
}

impl From<Url> for LocationInput {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<&Url> for LocationInput {
    fn from(url: &Url) -> Self {
        Self::Url(url.clone())
    }
}

impl From<String> for LocationInput {
    fn from(href: String) -> Self {
        Self::Href(href)
    }
}

impl From<&str> for LocationInput {
    fn from(href: &str) -> Self {
        Self::Href(href.to_string())
    }
}

impl LocationState {
    /// Create a location, collapsing an empty query and an empty fragment to `None`.
    pub fn new(path: impl Into<String>, query: Option<Query>, hash: Option<String>) -> Self {
        Self {
            path: path.into(),
            query: query.filter(|query| !query.is_empty()),
            hash: hash.filter(|hash| !hash.is_empty()),
        }
    }

    /// Build a location from `input`, resolving hrefs against `base`.
    ///
    /// ```rust
    /// # use dioxus_intercept::LocationState;
    /// let base = "https://example.com/docs/intro".parse().unwrap();
    /// let state = LocationState::parse("guide?page=2#top", &base).unwrap();
    /// assert_eq!(state.path, "/docs/guide");
    /// assert_eq!(state.query.unwrap()["page"], "2");
    /// assert_eq!(state.hash.as_deref(), Some("top"));
    /// ```
    pub fn parse(input: impl Into<LocationInput>, base: &Url) -> Result<Self, url::ParseError> {
        match input.into() {
            LocationInput::State(state) => Ok(state),
            LocationInput::Url(url) => Ok(Self::from_url(&url)),
            LocationInput::Href(href) => Ok(Self::from_url(&base.join(&href)?)),
        }
    }

    /// Read the path, query and fragment out of a resolved URL.
    ///
    /// Repeated query keys keep the position of their first occurrence and the value of the last.
    pub fn from_url(url: &Url) -> Self {
        let query: Query = url.query_pairs().into_owned().collect();
        Self::new(url.path(), Some(query), url.fragment().map(str::to_string))
    }

    /// The serialized query, including the leading `?`, or an empty string.
    pub fn search(&self) -> String {
        let Some(query) = self.query.as_ref().filter(|query| !query.is_empty()) else {
            return String::new();
        };

        let pairs = query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, COMPONENT),
                    utf8_percent_encode(value, COMPONENT)
                )
            })
            .collect::<Vec<_>>();

        format!("?{}", pairs.join("&"))
    }

    /// Whether both locations serialize to the same canonical URL.
    ///
    /// This is the equality used to suppress redundant navigations; two queries that differ only
    /// in ways the serializer erases are the same location.
    pub fn same_location(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Display for LocationState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.search())?;
        match self.hash.as_deref() {
            Some(hash) if !hash.is_empty() => write!(f, "#{hash}"),
            _ => Ok(()),
        }
    }
}

/// Absent queries and fragments travel as `false` inside history entries and event payloads.
mod absent {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Query;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire<T> {
        Present(T),
        Flag(#[allow(dead_code)] bool),
    }

    pub(super) fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_bool(false),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Wire<String>>::deserialize(deserializer)? {
            Some(Wire::Present(hash)) if !hash.is_empty() => Some(hash),
            _ => None,
        })
    }

    pub(super) fn deserialize_query<'de, D>(deserializer: D) -> Result<Option<Query>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Wire<Query>>::deserialize(deserializer)? {
            Some(Wire::Present(query)) if !query.is_empty() => Some(query),
            _ => None,
        })
    }
}
