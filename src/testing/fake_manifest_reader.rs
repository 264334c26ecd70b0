use std::sync::Mutex;

use crate::domain::{AppError, InstalledComponents};
use crate::ports::ManifestReader;

pub struct FakeManifestReader {
    result: Mutex<Option<Result<InstalledComponents, AppError>>>,
}

impl FakeManifestReader {
    pub fn installed(installed: InstalledComponents) -> Self {
        Self { result: Mutex::new(Some(Ok(installed))) }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Mutex::new(Some(Err(error))) }
    }
}

impl ManifestReader for FakeManifestReader {
    fn read_installed(&self) -> Result<InstalledComponents, AppError> {
        self.result.lock().unwrap().take().unwrap_or_else(|| Ok(InstalledComponents::new()))
    }
}
