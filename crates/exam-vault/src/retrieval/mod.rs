//! Read-only catalog queries over the question store

pub mod catalog;

pub use catalog::{list_courses, list_exams, list_questions};
