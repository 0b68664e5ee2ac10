//! REQ envelope and output modes.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::Result;
use crate::filter::Filter;

/// Subscription id used for every REQ this tool prints.
pub const DEFAULT_SUBSCRIPTION_ID: &str = "nak";

/// A client-to-relay `["REQ", <subscription id>, <filter>]` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReqMessage<'a> {
    pub subscription_id: &'a str,
    pub filter: &'a Filter,
}

impl<'a> ReqMessage<'a> {
    /// Wraps a filter using [`DEFAULT_SUBSCRIPTION_ID`].
    pub fn new(filter: &'a Filter) -> Self {
        Self {
            subscription_id: DEFAULT_SUBSCRIPTION_ID,
            filter,
        }
    }

    /// Encodes the message as a single-line JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ReqMessage<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element("REQ")?;
        seq.serialize_element(self.subscription_id)?;
        seq.serialize_element(self.filter)?;
        seq.end()
    }
}

/// How a filter is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Just the filter object.
    Bare,
    /// The filter wrapped in a REQ message.
    #[default]
    Enveloped,
}

impl OutputMode {
    /// Maps a `--bare` style flag to a mode.
    pub fn from_bare(bare: bool) -> Self {
        if bare {
            Self::Bare
        } else {
            Self::Enveloped
        }
    }
}

/// Renders a filter in the given mode.
///
/// # Examples
///
/// ```
/// use nostr_filter::{render, Filter, OutputMode};
///
/// let filter = Filter::default();
/// assert_eq!(render(&filter, OutputMode::Enveloped).unwrap(), r#"["REQ","nak",{}]"#);
/// assert_eq!(render(&filter, OutputMode::Bare).unwrap(), "{}");
/// ```
pub fn render(filter: &Filter, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Bare => filter.to_json(),
        OutputMode::Enveloped => ReqMessage::new(filter).to_json(),
    }
}
