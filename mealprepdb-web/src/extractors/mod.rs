pub mod query;

pub use query::{Validate, ValidatedJson, ValidatedQuery};
