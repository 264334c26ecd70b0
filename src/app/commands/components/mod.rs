//! Components command module for `sdkc components` subcommands.

pub mod list;
mod list_local;

pub use list::{ListOptions, execute as list};
pub use list_local::execute as list_local;
