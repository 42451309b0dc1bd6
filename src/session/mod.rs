//! High-level session API.
//!
//! A session loads one dataset according to a [`SessionConfig`] and runs
//! reports against it. The dataset never changes while the session is open.

mod api;
mod config;

pub use api::{Session, SessionError, SessionResult};
pub use config::{DatasetSource, SessionConfig};
