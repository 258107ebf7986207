pub mod person_repo;

pub use person_repo::{PatchError, PersonRepo};
