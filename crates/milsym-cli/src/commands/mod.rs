//! Command implementations.

pub mod catalog;
pub mod generate;
pub mod list;

pub use self::catalog::execute_catalog;
pub use self::generate::{execute_generate, run_generate};
pub use self::list::execute_list;
