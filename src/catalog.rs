//! The resource catalog.
//!
//! The directory is small and fixed: a handful of support services baked into
//! the executable. There's no reload mechanism; if the list changes, we
//! redeploy.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};
use thiserror::Error;

/// The kind of support a resource provides.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DomesticViolence,
    MentalHealth,
    LegalAid,
    Housing,
}

impl Category {
    /// The wire name of the category, as used in JSON and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DomesticViolence => "domestic-violence",
            Category::MentalHealth => "mental-health",
            Category::LegalAid => "legal-aid",
            Category::Housing => "housing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub location: String,
    pub phone: String,
    pub website: String,
    #[serde(rename = "available24h")]
    pub available_24h: bool,
    pub description: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate resource id {0}")]
    DuplicateId(u32),

    #[error("resource {0} has an empty name")]
    EmptyName(u32),
}

/// An ordered, immutable list of resources.
#[derive(Debug)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    /// Build a catalog from an explicit list, checking that ids are unique
    /// and names non-empty. Order is preserved.
    pub fn from_resources(resources: Vec<Resource>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(resources.len());

        for r in &resources {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId(r.id));
            }

            if r.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(r.id));
            }
        }

        Ok(Catalog { resources })
    }

    /// The built-in catalog that ships with the service.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn all(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    name: &str,
    category: Category,
    location: &str,
    phone: &str,
    website: &str,
    available_24h: bool,
    description: &str,
) -> Resource {
    Resource {
        id,
        name: name.to_owned(),
        category,
        location: location.to_owned(),
        phone: phone.to_owned(),
        website: website.to_owned(),
        available_24h,
        description: description.to_owned(),
    }
}

// Ids must stay unique; `builtin_is_valid` checks this.
// Websites are normalized to `https://` and phones drop the `(tel:...)` suffix
// that the first deployment's data carried.
static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    resources: vec![
        entry(
            1,
            "National Domestic Violence Hotline",
            Category::DomesticViolence,
            "National",
            "1-800-799-7233",
            "https://www.thehotline.org",
            true,
            "24/7 confidential support",
        ),
        entry(
            2,
            "Crisis Text Line",
            Category::MentalHealth,
            "National",
            "Text HOME to 741741",
            "https://www.crisistextline.org",
            true,
            "24/7 crisis support via text",
        ),
        entry(
            3,
            "Local Women's Shelter - NYC",
            Category::DomesticViolence,
            "New York",
            "212-555-0123",
            "https://example-shelter.org",
            false,
            "Safe housing and support services",
        ),
    ],
});

#[cfg(test)]
mod test {
    use super::*;

    fn sample(id: u32, name: &str) -> Resource {
        entry(id, name, Category::Housing, "Boston", "", "", false, "")
    }

    #[test]
    fn builtin_is_valid() {
        let records = Catalog::builtin().all().to_vec();
        let rebuilt = Catalog::from_resources(records).unwrap();
        assert_eq!(rebuilt.len(), 3);
        assert_eq!(rebuilt.all(), Catalog::builtin().all());
    }

    #[test]
    fn builtin_is_stable() {
        let a = Catalog::builtin().all();
        let b = Catalog::builtin().all();
        assert!(std::ptr::eq(a, b));
        let ids: Vec<u32> = a.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn builtin_contact_details_are_normalized() {
        for r in Catalog::builtin().all() {
            assert!(r.website.starts_with("https://"), "{}", r.website);
            assert!(!r.phone.contains("(tel:"), "{}", r.phone);
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_resources(vec![sample(4, "a"), sample(4, "b")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(4));
    }

    #[test]
    fn rejects_empty_names() {
        let err = Catalog::from_resources(vec![sample(1, "a"), sample(2, "  ")]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyName(2));
    }

    #[test]
    fn empty_catalog_is_fine() {
        let cat = Catalog::from_resources(Vec::new()).unwrap();
        assert!(cat.is_empty());
    }

    #[test]
    fn resource_wire_format() {
        let v = serde_json::to_value(&Catalog::builtin().all()[2]).unwrap();
        assert_eq!(v["category"], "domestic-violence");
        assert_eq!(v["location"], "New York");
        assert_eq!(v["available24h"], false);
        assert!(v.get("available_24h").is_none());
    }

    #[test]
    fn category_names() {
        for c in [
            Category::DomesticViolence,
            Category::MentalHealth,
            Category::LegalAid,
            Category::Housing,
        ] {
            let v = serde_json::to_value(c).unwrap();
            assert_eq!(v, c.as_str());
            assert_eq!(c.to_string(), c.as_str());
        }
    }
}
