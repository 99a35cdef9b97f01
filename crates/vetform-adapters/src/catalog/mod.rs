//! `CountrySource` implementations: compiled-in catalogs and file catalogs.

pub mod builtin;
pub mod file;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;
