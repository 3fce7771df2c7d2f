//! The resource search query.
//!
//! Both criteria are optional. An absent or empty criterion matches
//! everything; otherwise the match is exact and case-sensitive. When both are
//! given, a resource has to satisfy both.

use crate::catalog::{Catalog, Resource};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub location: Option<String>,
    pub category: Option<String>,
}

impl SearchQuery {
    pub fn new<L: Into<String>, C: Into<String>>(location: Option<L>, category: Option<C>) -> Self {
        SearchQuery {
            location: location.map(Into::into),
            category: category.map(Into::into),
        }
    }

    /// Build a query from decoded `key=value` pairs. If a key repeats, the
    /// first value wins, as with API Gateway's `queryStringParameters`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = SearchQuery::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "location" => &mut query.location,
                "category" => &mut query.category,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        query
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|s| !s.is_empty())
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|s| !s.is_empty())
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(loc) = self.location() {
            if resource.location != loc {
                return false;
            }
        }

        if let Some(cat) = self.category() {
            if resource.category.as_str() != cat {
                return false;
            }
        }

        true
    }
}

impl Catalog {
    /// Return the resources matching `query`, in catalog order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Resource> {
        self.all().iter().filter(|r| query.matches(r)).collect()
    }
}
