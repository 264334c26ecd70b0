use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ComponentDescriptor};
use crate::ports::CatalogProvider;

/// Shared view of how many times a fake was called.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Catalog provider replaying a fixed sequence of responses.
pub struct FakeCatalogProvider {
    responses: Mutex<Vec<Result<Vec<ComponentDescriptor>, AppError>>>,
    calls: CallCounter,
}

impl FakeCatalogProvider {
    pub fn sequence(responses: Vec<Result<Vec<ComponentDescriptor>, AppError>>) -> Self {
        Self { responses: Mutex::new(responses), calls: CallCounter::default() }
    }

    pub fn returning(catalog: Vec<ComponentDescriptor>) -> Self {
        Self::sequence(vec![Ok(catalog)])
    }

    pub fn call_counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl CatalogProvider for FakeCatalogProvider {
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError> {
        self.calls.bump();
        let mut guard = self.responses.lock().unwrap();
        if guard.is_empty() {
            return Err(AppError::catalog_unavailable(self.describe(), "test: unexpected extra call"));
        }
        guard.remove(0)
    }

    fn describe(&self) -> String {
        "fake://catalog".to_string()
    }
}
