mod data;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Category, Endpoint};

/// Root of every documented endpoint URL.
pub const API_HOST: &str = "https://host.optikl.ink";

/// Read-only catalog of endpoint descriptions, built once at startup.
/// Order is category-then-authoring order and stable across calls.
pub struct Catalog {
    endpoints: Vec<Endpoint>,
}

impl Catalog {
    pub fn load() -> Self {
        let endpoints = data::endpoints();
        debug_assert!(
            {
                let mut ids: Vec<&str> = endpoints.iter().map(|ep| ep.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "catalog endpoint ids must be unique"
        );
        Self { endpoints }
    }

    pub fn all(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn by_category(&self, category: Category) -> Vec<&Endpoint> {
        self.endpoints.iter().filter(|ep| ep.category == category).collect()
    }

    pub fn find(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|ep| ep.id == id)
    }

    /// Case-insensitive substring match over path, description and id, in
    /// catalog order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Endpoint> {
        let needle = query.to_lowercase();
        self.endpoints
            .iter()
            .filter(|ep| {
                ep.path.to_lowercase().contains(&needle)
                    || ep.description.to_lowercase().contains(&needle)
                    || ep.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Endpoint counts per category, in canonical category order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self.endpoints.iter().filter(|ep| ep.category == category).count();
                (category, count)
            })
            .collect()
    }

    pub fn export(&self) -> CatalogExport {
        CatalogExport {
            base_url: API_HOST.to_string(),
            endpoints: self.endpoints.clone(),
            exported_at: Utc::now(),
        }
    }
}

/// Snapshot written by the `export` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogExport {
    pub base_url: String,
    pub endpoints: Vec<Endpoint>,
    pub exported_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::load();
        let mut ids: Vec<&str> = catalog.all().iter().map(|ep| ep.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn find_returns_every_cataloged_endpoint() {
        let catalog = Catalog::load();
        for endpoint in catalog.all() {
            let found = catalog.find(&endpoint.id).expect("endpoint should be findable by id");
            assert_eq!(found, endpoint);
        }
        assert!(catalog.find("no-such-endpoint").is_none());
    }

    #[test]
    fn by_category_holds_each_endpoint_exactly_once() {
        let catalog = Catalog::load();
        for endpoint in catalog.all() {
            let members = catalog.by_category(endpoint.category);
            let hits = members.iter().filter(|ep| ep.id == endpoint.id).count();
            assert_eq!(hits, 1, "{} should appear exactly once in its category", endpoint.id);
        }
    }

    #[test]
    fn by_category_preserves_catalog_order() {
        let catalog = Catalog::load();
        for category in Category::ALL {
            let members = catalog.by_category(category);
            let expected: Vec<&str> = catalog
                .all()
                .iter()
                .filter(|ep| ep.category == category)
                .map(|ep| ep.id.as_str())
                .collect();
            let actual: Vec<&str> = members.iter().map(|ep| ep.id.as_str()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn order_is_stable_across_calls() {
        let catalog = Catalog::load();
        let first: Vec<&str> = catalog.all().iter().map(|ep| ep.id.as_str()).collect();
        let second: Vec<&str> = catalog.all().iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn search_matches_path_description_and_id() {
        let catalog = Catalog::load();

        let by_path: Vec<&str> = catalog.search("/tools/translate").iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(by_path, vec!["tool-translate"]);

        let by_id: Vec<&str> = catalog.search("AI-PERPLEXITY").iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(by_id, vec!["ai-perplexity"]);

        let by_description = catalog.search("soundcloud");
        assert!(by_description.iter().any(|ep| ep.id == "soundcloud-search"));
        assert!(by_description.iter().any(|ep| ep.id == "soundcloud-download"));

        assert!(catalog.search("zzzzz-no-match").is_empty());
        assert_eq!(catalog.search("").len(), catalog.all().len());
    }

    #[test]
    fn category_counts_cover_the_whole_catalog() {
        let catalog = Catalog::load();
        let counts = catalog.category_counts();
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.all().len());

        let order: Vec<Category> = counts.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
