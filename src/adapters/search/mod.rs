//! Document search adapters. Implement DocumentSearchPort.
//!
//! Only a mock exists until the full-text backend is wired in.

pub mod mock_search;

pub use mock_search::MockDocumentSearch;
