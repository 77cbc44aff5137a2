//! Fantasy Premier League API access.
//!
//! - `types`: serde wire types for the endpoints the reports read
//! - `source`: the `DataSource` trait the league builders and reports consume
//! - `http`: reqwest-backed `DataSource`
//! - `memo`: within-run memoizing wrapper around any `DataSource`

pub mod http;
pub mod memo;
pub mod source;
pub mod types;

pub use http::FplClient;
pub use memo::MemoSource;
pub use source::DataSource;
