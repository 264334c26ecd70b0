//! Pure parse/validate for published catalog documents (JSON).

use serde::Deserialize;

use crate::domain::{AppError, ComponentDescriptor, ComponentId, ComponentVersion};

const CATALOG_SCHEMA_VERSION: u32 = 1;

/// A decoded catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDocument {
    pub revision: Option<String>,
    /// Descriptors in document order. Duplicate ids are preserved for the resolver to reject.
    pub components: Vec<ComponentDescriptor>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocumentDto {
    schema_version: u32,
    #[serde(default)]
    revision: Option<String>,
    #[serde(default)]
    components: Vec<ComponentDto>,
}

#[derive(Debug, Deserialize)]
struct ComponentDto {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    size_bytes: u64,
    version: String,
}

/// Parse a catalog document fetched from `origin`.
pub fn parse_catalog_document(content: &str, origin: &str) -> Result<CatalogDocument, AppError> {
    let dto: CatalogDocumentDto = serde_json::from_str(content).map_err(|e| {
        AppError::catalog_unavailable(origin, format!("malformed catalog document: {}", e))
    })?;

    if dto.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(AppError::catalog_unavailable(
            origin,
            format!(
                "unsupported catalog schema_version {} (expected {})",
                dto.schema_version, CATALOG_SCHEMA_VERSION
            ),
        ));
    }

    let mut components = Vec::with_capacity(dto.components.len());
    for (index, component) in dto.components.into_iter().enumerate() {
        let id = ComponentId::new(&component.id).map_err(|e| {
            AppError::catalog_unavailable(origin, format!("component #{}: {}", index, e))
        })?;
        let latest_version = ComponentVersion::new(&component.version).map_err(|e| {
            AppError::catalog_unavailable(origin, format!("component '{}': {}", id, e))
        })?;
        let display_name = component
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| id.to_string());

        components.push(ComponentDescriptor {
            id,
            display_name,
            size_bytes: component.size_bytes,
            latest_version,
        });
    }

    Ok(CatalogDocument { revision: dto.revision, components })
}
