//! Catalog provider port definition.

use crate::domain::{AppError, ComponentDescriptor};

/// Source of the published component catalog.
///
/// Any failure to obtain or decode the catalog is reported as
/// `AppError::CatalogUnavailable`.
pub trait CatalogProvider {
    /// Fetch catalog descriptors in published order.
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError>;

    /// Human-readable location of the catalog, for logs and errors.
    fn describe(&self) -> String;
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for Box<P> {
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError> {
        (**self).fetch_catalog()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
