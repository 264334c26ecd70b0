//! Installation status resolution.

use std::collections::BTreeSet;

use crate::domain::{
    AppError, ComponentDescriptor, ComponentId, ComponentStatus, InstalledComponents, StatusEntry,
};

/// Reject a catalog that lists the same component id more than once.
///
/// The first repeated id is reported.
pub fn ensure_unique_ids(catalog: &[ComponentDescriptor]) -> Result<(), AppError> {
    let mut seen: BTreeSet<&ComponentId> = BTreeSet::new();
    for descriptor in catalog {
        if !seen.insert(&descriptor.id) {
            return Err(AppError::DuplicateComponent(descriptor.id.to_string()));
        }
    }
    Ok(())
}

/// Domain logic for merging the catalog with the local installation state.
pub struct StatusResolver;

impl StatusResolver {
    /// Resolve the status of every catalog component.
    ///
    /// Entries come back in catalog order. Installed components that the catalog
    /// does not list are ignored. A catalog listing the same id twice is rejected
    /// before any entry is produced.
    pub fn resolve(
        catalog: &[ComponentDescriptor],
        installed: &InstalledComponents,
    ) -> Result<Vec<StatusEntry>, AppError> {
        ensure_unique_ids(catalog)?;

        Ok(catalog
            .iter()
            .map(|descriptor| {
                let record = installed.get(&descriptor.id);
                let status = match record {
                    None => ComponentStatus::NotInstalled,
                    Some(r) if r.installed_version == descriptor.latest_version => {
                        ComponentStatus::UpToDate
                    }
                    Some(_) => ComponentStatus::UpdateAvailable,
                };

                StatusEntry {
                    descriptor: descriptor.clone(),
                    installed_version: record.map(|r| r.installed_version.clone()),
                    status,
                }
            })
            .collect())
    }

    /// Installed ids the catalog does not list, in id order.
    pub fn orphaned<'a>(
        catalog: &[ComponentDescriptor],
        installed: &'a InstalledComponents,
    ) -> Vec<&'a ComponentId> {
        let listed: BTreeSet<&ComponentId> = catalog.iter().map(|d| &d.id).collect();
        installed.keys().filter(|id| !listed.contains(id)).collect()
    }
}
