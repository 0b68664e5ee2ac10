//! The NIP-01 filter object.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::tags::TagMap;
use crate::timestamp::Timestamp;

/// A subscription filter.
///
/// Every field is optional; an unset field places no restriction. Unset and
/// empty collections are both omitted when serialized, so the JSON form never
/// carries `null` or `[]` placeholders.
///
/// Fields are written in a fixed order: `ids`, `kinds`, `authors`, one `#<name>`
/// entry per tag group, `since`, `until`, `limit`.
///
/// # Examples
///
/// ```
/// use nostr_filter::Filter;
///
/// let filter = Filter {
///     authors: Some(vec!["abc".to_string()]),
///     kinds: Some(vec![1]),
///     ..Filter::default()
/// };
/// assert_eq!(filter.to_json().unwrap(), r#"{"kinds":[1],"authors":["abc"]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Event ids (hex, unvalidated).
    pub ids: Option<Vec<String>>,
    /// Event kinds.
    pub kinds: Option<Vec<u16>>,
    /// Author public keys (hex, unvalidated).
    pub authors: Option<Vec<String>>,
    /// Tag restrictions. `None` means no tag filter at all.
    pub tags: Option<TagMap>,
    /// Lower time bound.
    pub since: Option<Timestamp>,
    /// Upper time bound.
    pub until: Option<Timestamp>,
    /// Maximum number of events.
    pub limit: Option<u64>,
}

impl Filter {
    /// Returns true if the filter places no restriction at all.
    pub fn is_empty(&self) -> bool {
        present(&self.ids).is_none()
            && present(&self.kinds).is_none()
            && present(&self.authors).is_none()
            && self.tags.as_ref().map_or(true, TagMap::is_empty)
            && self.since.is_none()
            && self.until.is_none()
            && self.limit.is_none()
    }

    /// Encodes the filter as a single-line JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Returns the slice only when it holds at least one element.
fn present<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field.as_deref().filter(|values| !values.is_empty())
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(ids) = present(&self.ids) {
            map.serialize_entry("ids", ids)?;
        }
        if let Some(kinds) = present(&self.kinds) {
            map.serialize_entry("kinds", kinds)?;
        }
        if let Some(authors) = present(&self.authors) {
            map.serialize_entry("authors", authors)?;
        }
        if let Some(tags) = &self.tags {
            for (name, values) in tags.iter() {
                map.serialize_entry(&format!("#{name}"), values)?;
            }
        }
        if let Some(since) = &self.since {
            map.serialize_entry("since", since)?;
        }
        if let Some(until) = &self.until {
            map.serialize_entry("until", until)?;
        }
        if let Some(limit) = &self.limit {
            map.serialize_entry("limit", limit)?;
        }

        map.end()
    }
}
