//! Subject data providers.
//!
//! [`BuiltinCatalog`] serves the bundled demo data.
//! [`JsonFileCatalog`] reads subjects from a JSON file on disk.

pub mod builtin;
mod json_file;

pub use builtin::BuiltinCatalog;
pub use json_file::JsonFileCatalog;
