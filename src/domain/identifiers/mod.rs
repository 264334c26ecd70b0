//! Validated identifiers shared across the domain.

mod component_id;
pub mod validation;

pub use component_id::ComponentId;
