//! Static example and category tables.
//!
//! Process-wide immutable configuration data: the tables are built at
//! compile time and expose no mutation API.

mod table;
mod types;

pub use table::{
    categories, category_package_name, examples, find_category, find_example, package_name,
    validate, PACKAGE_PREFIX,
};
pub use types::{CategoryDescriptor, ExampleDescriptor};
