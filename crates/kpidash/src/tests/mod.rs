//! Integration tests for the dashboard shell
//!
//! Tests are organized by topic:
//! - `app` - Key handling, request dispatch and completion routing
//! - `render` - Screen output drawn to a test backend
//!
//! Both drive the real `App` with [`support::InlineWorker`], which answers each
//! ticket synchronously from canned per-endpoint responses.

mod support;
