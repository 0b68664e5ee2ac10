//! Tag predicates and their grouped form.
//!
//! A filter's tag restrictions come from several inputs (`k=v` strings and the
//! `e`/`p` shortcuts). Each input is first normalized into a [`TagPair`], then
//! the ordered pairs are folded into a [`TagMap`].

/// Separator between the tag name and value in a generic tag predicate.
pub const TAG_SEPARATOR: char = '=';

/// A single `(name, value)` tag predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    /// Single-character tag name (e.g. `e`, `p`, `t`).
    pub name: char,
    /// Value the tag must carry.
    pub value: String,
}

impl TagPair {
    /// Creates a pair from an already-known tag name.
    pub fn new(name: char, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Parses a generic `k=v` predicate.
    ///
    /// Returns `None` unless the input contains exactly one `=` and the part
    /// before it is exactly one character. The value may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nostr_filter::TagPair;
    ///
    /// assert_eq!(TagPair::parse("t=nostr"), Some(TagPair::new('t', "nostr")));
    /// assert_eq!(TagPair::parse("ab=1"), None);
    /// assert_eq!(TagPair::parse("novalue"), None);
    /// assert_eq!(TagPair::parse("e=1=2"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(TAG_SEPARATOR);
        let key = parts.next()?;
        let value = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let mut chars = key.chars();
        let name = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        Some(Self::new(name, value))
    }
}

/// Tag values grouped by tag name.
///
/// Groups are kept in the order their name was first seen, and values within
/// a group keep insertion order, so serialization is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    groups: Vec<(char, Vec<String>)>,
}

impl TagMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds ordered pairs into groups in a single pass.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = TagPair>,
    {
        let mut map = Self::new();
        for pair in pairs {
            map.push(pair.name, pair.value);
        }
        map
    }

    /// Appends a value to the group for `name`, creating the group on first use.
    pub fn push(&mut self, name: char, value: impl Into<String>) {
        let value = value.into();
        match self.groups.iter_mut().find(|(key, _)| *key == name) {
            Some((_, values)) => values.push(value),
            None => self.groups.push((name, vec![value])),
        }
    }

    /// Returns the values for a tag name.
    pub fn get(&self, name: char) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterates groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> {
        self.groups
            .iter()
            .map(|(key, values)| (*key, values.as_slice()))
    }

    /// Number of distinct tag names.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no tag name has been added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<TagPair> for TagMap {
    fn from_iter<I: IntoIterator<Item = TagPair>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
