//! Nostr REQ filter construction and serialization.
//!
//! This crate turns a flat set of selector values (the kind a command line
//! produces) into a NIP-01 [`Filter`], and renders it either as a bare JSON
//! object or wrapped in a `["REQ", <subscription id>, <filter>]` message.
//!
//! # Quick Start
//!
//! ```
//! use nostr_filter::prelude::*;
//!
//! let selectors = Selectors {
//!     kinds: vec![1],
//!     tags: vec!["t=nostr".to_string()],
//!     event_tags: vec!["abcd".to_string()],
//!     limit: Some(10),
//!     ..Selectors::default()
//! };
//!
//! let filter = selectors.build();
//! let line = render(&filter, OutputMode::Enveloped).unwrap();
//! assert_eq!(
//!     line,
//!     r##"["REQ","nak",{"kinds":[1],"#t":["nostr"],"#e":["abcd"],"limit":10}]"##
//! );
//! ```

pub mod error;
pub mod filter;
pub mod message;
pub mod prelude;
pub mod selectors;
pub mod tags;
pub mod timestamp;

pub use error::{Error, Result};
pub use filter::Filter;
pub use message::{render, OutputMode, ReqMessage, DEFAULT_SUBSCRIPTION_ID};
pub use selectors::Selectors;
pub use tags::{TagMap, TagPair};
pub use timestamp::Timestamp;
