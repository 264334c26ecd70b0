use crate::domain::{
    ComponentDescriptor, ComponentId, ComponentVersion, InstalledComponents, InstalledRecord,
};

pub fn descriptor(id: &str, display_name: &str, size_bytes: u64, latest: &str) -> ComponentDescriptor {
    ComponentDescriptor {
        id: ComponentId::new(id).unwrap(),
        display_name: display_name.to_string(),
        size_bytes,
        latest_version: ComponentVersion::new(latest).unwrap(),
    }
}

/// `gcloud@2.0`, `bq@3.1`, `kubectl@1.29.1` in that order.
pub fn sample_catalog() -> Vec<ComponentDescriptor> {
    vec![
        descriptor("gcloud", "Cloud SDK Core Libraries", 21_402_343, "2.0"),
        descriptor("bq", "BigQuery Command Line Tool", 1_700_000, "3.1"),
        descriptor("kubectl", "kubectl", 95_000_000, "1.29.1"),
    ]
}

pub fn installed(pairs: &[(&str, &str)]) -> InstalledComponents {
    pairs
        .iter()
        .map(|(id, version)| {
            let id = ComponentId::new(id).unwrap();
            let record = InstalledRecord {
                id: id.clone(),
                installed_version: ComponentVersion::new(version).unwrap(),
            };
            (id, record)
        })
        .collect()
}
