//! Dataset providers.
//!
//! The query layer only sees the [`DatasetProvider`] trait. Two providers
//! ship with the crate: the hard-coded [`ReferenceDataset`] and
//! [`JsonDataset`], which reads the same collections from a JSON document.

mod error;
mod fixture;
mod json;
mod provider;

pub use error::{DatasetError, DatasetResult};
pub use fixture::ReferenceDataset;
pub use json::{to_json, JsonDataset};
pub use provider::DatasetProvider;
