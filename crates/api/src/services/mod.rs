//! Use-case layer between HTTP handlers and the repository / enrichment
//! crates.

pub mod person;

pub use person::PersonService;
