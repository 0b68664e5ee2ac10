//! Raw selector values and the filter they build.

use crate::filter::Filter;
use crate::tags::{TagMap, TagPair};
use crate::timestamp::Timestamp;

/// Tag name produced by the event shortcut.
pub const EVENT_TAG: char = 'e';

/// Tag name produced by the pubkey shortcut.
pub const PUBKEY_TAG: char = 'p';

/// Selector values as they come from the command line.
///
/// Empty collections mean "not given". For `since`, `until` and `limit`, zero
/// also means "not given": the flag source has no separate encoding for an
/// explicit zero, so a bound of zero cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selectors {
    /// Author public keys.
    pub authors: Vec<String>,
    /// Event ids.
    pub ids: Vec<String>,
    /// Event kinds.
    pub kinds: Vec<u16>,
    /// Generic `k=v` tag predicates.
    pub tags: Vec<String>,
    /// Values for the `e` tag shortcut.
    pub event_tags: Vec<String>,
    /// Values for the `p` tag shortcut.
    pub pubkey_tags: Vec<String>,
    /// Lower time bound (unix seconds).
    pub since: Option<i64>,
    /// Upper time bound (unix seconds).
    pub until: Option<i64>,
    /// Maximum number of events.
    pub limit: Option<u64>,
}

impl Selectors {
    /// Builds the filter. Never fails; malformed generic tags are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use nostr_filter::Selectors;
    ///
    /// let selectors = Selectors {
    ///     tags: vec!["e=1".into(), "p=2".into()],
    ///     event_tags: vec!["3".into()],
    ///     pubkey_tags: vec!["4".into()],
    ///     ..Selectors::default()
    /// };
    ///
    /// let filter = selectors.build();
    /// let tags = filter.tags.unwrap();
    /// assert_eq!(tags.get('e').unwrap(), ["1", "3"]);
    /// assert_eq!(tags.get('p').unwrap(), ["2", "4"]);
    /// ```
    pub fn build(&self) -> Filter {
        let pairs = self.tag_pairs();
        let tags = if pairs.is_empty() {
            None
        } else {
            Some(TagMap::from_pairs(pairs))
        };

        Filter {
            ids: non_empty(&self.ids),
            kinds: non_empty(&self.kinds),
            authors: non_empty(&self.authors),
            tags,
            since: non_zero(self.since).map(Timestamp::from),
            until: non_zero(self.until).map(Timestamp::from),
            limit: non_zero(self.limit),
        }
    }

    /// Normalizes every tag source into one ordered list.
    ///
    /// Order is generic predicates first, then event shortcut values, then
    /// pubkey shortcut values, each keeping its own input order.
    pub fn tag_pairs(&self) -> Vec<TagPair> {
        let generic = self.tags.iter().filter_map(|raw| TagPair::parse(raw));
        let events = self
            .event_tags
            .iter()
            .map(|value| TagPair::new(EVENT_TAG, value.as_str()));
        let pubkeys = self
            .pubkey_tags
            .iter()
            .map(|value| TagPair::new(PUBKEY_TAG, value.as_str()));

        generic.chain(events).chain(pubkeys).collect()
    }

    /// Generic tag predicates that [`TagPair::parse`] rejects.
    pub fn rejected_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|raw| TagPair::parse(raw).is_none())
    }
}

fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

fn non_zero<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}
