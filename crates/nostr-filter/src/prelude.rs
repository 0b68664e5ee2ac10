//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use nostr_filter::prelude::*;
//!
//! // Now you have access to:
//! // - Selectors (raw selector values)
//! // - Filter, TagMap, TagPair, Timestamp (the filter model)
//! // - ReqMessage, OutputMode, render (serialization)
//! // - Error, Result (error handling)
//! ```

// Error types
pub use crate::error::{Error, Result};

// Filter model
pub use crate::filter::Filter;
pub use crate::tags::{TagMap, TagPair};
pub use crate::timestamp::Timestamp;

// Construction
pub use crate::selectors::Selectors;

// Serialization
pub use crate::message::{render, OutputMode, ReqMessage, DEFAULT_SUBSCRIPTION_ID};
