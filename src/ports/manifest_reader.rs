//! Local installation manifest port definition.

use crate::domain::{AppError, InstalledComponents};

/// Reader for on-disk installation state.
pub trait ManifestReader {
    /// Read installed components. Corrupt state is reported as
    /// `AppError::LocalManifestCorrupt`.
    fn read_installed(&self) -> Result<InstalledComponents, AppError>;
}
