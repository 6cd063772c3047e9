//! Print top level fields from a json document.
//!
//! The document is loaded with [`loader::load`], which keeps only the first
//! element when the document is an array. Fields are then looked up in that
//! working value and printed with [`printer::print_fields`].

pub mod cli;
pub mod error;
pub mod loader;
pub mod printer;

pub use error::{Error, FieldsResult};
pub use loader::load;
pub use printer::{print_fields, write_fields};
