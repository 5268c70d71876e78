//! Domain registry
//!
//! Maps domain identifiers to the human-readable labels used in filenames
//! and document headers.

use std::collections::BTreeMap;

/// Built-in labels for the dashboard's standard domains
const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("appliances", "Appliances"),
    ("career", "Career"),
    ("collectibles", "Collectibles"),
    ("digital", "Digital Life"),
    ("documents", "Documents"),
    ("education", "Education"),
    ("financial", "Financial"),
    ("fitness", "Fitness"),
    ("goals", "Goals"),
    ("habits", "Habits"),
    ("health", "Health"),
    ("home", "Home"),
    ("insurance", "Insurance"),
    ("legal", "Legal"),
    ("mindfulness", "Mindfulness"),
    ("miscellaneous", "Miscellaneous"),
    ("nutrition", "Nutrition"),
    ("pets", "Pets"),
    ("relationships", "Relationships"),
    ("travel", "Travel"),
    ("vehicles", "Vehicles"),
];

/// Read-only lookup of domain labels
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    labels: BTreeMap<String, String>,
}

impl DomainRegistry {
    /// Registry with only the built-in labels
    pub fn builtin() -> Self {
        Self {
            labels: BUILTIN_LABELS
                .iter()
                .map(|(id, label)| (id.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Built-in labels overlaid with the given ones
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut registry = Self::builtin();
        for (id, label) in overrides {
            registry.labels.insert(id.clone(), label.clone());
        }
        registry
    }

    /// Human label for a domain, falling back to the identifier itself
    pub fn label<'a>(&'a self, domain: &'a str) -> &'a str {
        self.labels.get(domain).map(String::as_str).unwrap_or(domain)
    }

    /// Whether the domain has a registered label
    pub fn contains(&self, domain: &str) -> bool {
        self.labels.contains_key(domain)
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
