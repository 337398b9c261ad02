//! Infrastructure adapters. Implement ports.
//!
//! In-memory stores, mock search, sample data, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod sample_data;
pub mod search;
pub mod ui;
