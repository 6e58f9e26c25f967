//! Repository layer
//!
//! Repositories are stateless HTTP wrappers that abstract communication
//! with the review API. They do no validation of their own.
//!
//! Trait-based so the poll loop can be driven by in-memory fakes in tests.

mod homeworks;

pub use homeworks::HomeworkRepository;
pub use homeworks::HttpHomeworkRepository;
