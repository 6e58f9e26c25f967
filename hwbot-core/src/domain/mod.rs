//! Core domain types
//!
//! Review statuses reported by the homework API and the fixed verdict
//! table used to turn them into notification text.

pub mod homework;
