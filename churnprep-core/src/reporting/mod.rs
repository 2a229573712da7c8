//! Run reporting.
//!
//! A [`RunSummary`] records what one pipeline run did: row counts, the fitted
//! bin edges and the encodings applied. It can be written out as JSON.

mod summary;

pub use summary::{RunSummary, write_json};
