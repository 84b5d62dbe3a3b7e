//! Parsing of RFC 5988 `Link` response headers into pagination relations.
//!
//! The API publishes pagination exclusively through the `Link` header, e.g.
//!
//! ```text
//! Link: <https://api.letsfreckle.com/v2/entries?page=3>; rel="next",
//!       <https://api.letsfreckle.com/v2/entries?page=1>; rel="first"
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A named direction from one page of results to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    First,
    Last,
    Next,
    Prev,
}

impl Relation {
    /// All relations the named page accessors understand
    pub const ALL: [Relation; 4] = [
        Relation::First,
        Relation::Last,
        Relation::Next,
        Relation::Prev,
    ];

    /// The `rel` value used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::First => "first",
            Relation::Last => "last",
            Relation::Next => "next",
            Relation::Prev => "prev",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Relation::First),
            "last" => Ok(Relation::Last),
            "next" => Ok(Relation::Next),
            "prev" => Ok(Relation::Prev),
            other => Err(format!("unknown link relation: {}", other)),
        }
    }
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<(.*?)>; rel="(.*?)""#).expect("link header pattern is valid")
    })
}

/// Relation name to URL mapping taken from a single `Link` header.
///
/// Unknown relation names are kept so callers can inspect them through
/// [`Links::get_raw`], but the named accessors only ever consult the four
/// [`Relation`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    inner: HashMap<String, String>,
}

impl Links {
    /// Parse the raw value of a `Link` header.
    ///
    /// Entries that don't look like `<url>; rel="name"` are skipped. When a
    /// relation appears more than once the last entry wins.
    pub fn parse(header: &str) -> Self {
        let mut inner = HashMap::new();
        for caps in link_pattern().captures_iter(header) {
            inner.insert(caps[2].to_string(), caps[1].to_string());
        }
        Links { inner }
    }

    /// URL for one of the known relations
    pub fn get(&self, rel: Relation) -> Option<&str> {
        self.get_raw(rel.as_str())
    }

    /// URL for any relation name, including ones not covered by [`Relation`]
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn contains(&self, rel: Relation) -> bool {
        self.inner.contains_key(rel.as_str())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(relation name, url)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
