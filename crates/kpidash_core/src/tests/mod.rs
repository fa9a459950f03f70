//! Integration tests for the kpidash client core
//!
//! Tests are organized by topic:
//! - `client` - Request building and response normalization against a fake transport
//! - `form` - Demo data population and request body collection
//! - `views` - Projection of analysis and weights payloads into view models
//! - `controllers` - Controller state transitions, including stale responses
//! - `properties` - Property tests for formatting and table ordering

mod form;
mod properties;
mod views;

pub(crate) mod fixtures;
