//! Display formatting for domain models.
//!
//! Display implementations are kept out of [`crate::models`] so data
//! structures and presentation stay separated. All formatters produce
//! markdown, which the CLI renders richly or prints as plain text.

pub mod models;
