//! Components domain: catalog descriptors, installation records, and status resolution.

mod descriptor;
mod installed;
mod listing;
mod status;
mod status_resolver;

pub use descriptor::{ComponentDescriptor, ComponentVersion};
pub use installed::{InstalledComponents, InstalledRecord};
pub use listing::{ComponentListing, LocalComponentEntry, LocalListing};
pub use status::{ComponentStatus, StatusEntry};
pub use status_resolver::{StatusResolver, ensure_unique_ids};
