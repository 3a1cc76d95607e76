//! Allowed tags and attributes.

use std::collections::HashMap;

use serde::Deserialize;

/// Key whose attributes are allowed on every tag.
pub const GLOBAL: &str = "*";

const DEFAULT_GLOBAL_ATTRS: &[&str] = &["class", "dir", "id", "lang", "role", "tabindex", "style"];

const DEFAULT_TAGS: &[(&str, &[&str])] = &[
    ("a", &["target", "href", "title", "rel"]),
    ("area", &[]),
    ("b", &[]),
    ("br", &[]),
    ("col", &[]),
    ("code", &[]),
    ("div", &[]),
    ("em", &[]),
    ("hr", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("i", &[]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("li", &[]),
    ("ol", &[]),
    ("p", &[]),
    ("pre", &[]),
    ("s", &[]),
    ("small", &[]),
    ("span", &[]),
    ("sub", &[]),
    ("sup", &[]),
    ("strong", &[]),
    ("u", &[]),
    ("ul", &[]),
];

/// Map from tag name to the attributes allowed on it.
///
/// A tag is allowed when it is a key, even with no attributes listed.
/// Attributes under [`GLOBAL`] are allowed on every allowed tag. Names are
/// stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct Whitelist {
    tags: HashMap<String, Vec<String>>,
}

impl Default for Whitelist {
    fn default() -> Self {
        let mut whitelist = Self::empty().allow(GLOBAL, DEFAULT_GLOBAL_ATTRS.iter().copied());
        for (tag, attrs) in DEFAULT_TAGS {
            whitelist = whitelist.allow(tag, attrs.iter().copied());
        }
        whitelist
    }
}

impl Whitelist {
    /// A whitelist allowing nothing.
    pub fn empty() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// Allow `tag` with `attrs`, extending any attributes already allowed.
    pub fn allow<I, S>(mut self, tag: &str, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.tags.entry(tag.to_ascii_lowercase()).or_default();
        for attr in attrs {
            let attr = attr.as_ref().to_ascii_lowercase();
            if !entry.contains(&attr) {
                entry.push(attr);
            }
        }
        self
    }

    /// Remove `tag` entirely.
    pub fn deny(mut self, tag: &str) -> Self {
        self.tags.remove(&tag.to_ascii_lowercase());
        self
    }

    pub fn allows_tag(&self, tag: &str) -> bool {
        tag != GLOBAL && self.tags.contains_key(tag)
    }

    /// Whether `attr` may stay on a `tag` element.
    pub fn allows_attr(&self, tag: &str, attr: &str) -> bool {
        [tag, GLOBAL]
            .iter()
            .filter_map(|key| self.tags.get(*key))
            .any(|attrs| attrs.iter().any(|allowed| allowed == attr))
    }
}

impl From<HashMap<String, Vec<String>>> for Whitelist {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        map.into_iter()
            .fold(Self::empty(), |whitelist, (tag, attrs)| whitelist.allow(&tag, attrs))
    }
}
