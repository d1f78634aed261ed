use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Money;

#[derive(Debug, Error)]
pub enum MenuError {
    /// An order or checkout request referenced an id the catalog does not
    /// contain. The message text is part of the API contract.
    #[error("Invalid item ID: {0}")]
    UnknownItem(u32),

    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("menu validation failed: {0}")]
    Validation(String),
}

/// A single purchasable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<String>,
}

impl MenuItem {
    /// Lowercased `name + description`, the text the suggestion engine
    /// matches keywords against.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

/// An ordered group of items (breakfast sandwiches, lunch specials, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    categories: Vec<MenuCategory>,
}

/// The authoritative menu: ordered categories plus a precomputed id index.
///
/// A single catalog instance backs both display/suggestions and checkout
/// pricing, so the two can never disagree about an item's price.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    categories: Vec<MenuCategory>,
    index: HashMap<u32, (usize, usize)>,
}

impl MenuCatalog {
    /// Builds a catalog from categories, validating as it goes.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Validation`] on duplicate ids, empty names, or
    /// non-positive prices.
    pub fn from_categories(categories: Vec<MenuCategory>) -> Result<Self, MenuError> {
        let mut index = HashMap::new();
        let mut seen_names = HashSet::new();

        for (ci, category) in categories.iter().enumerate() {
            for (ii, item) in category.items.iter().enumerate() {
                if item.name.trim().is_empty() {
                    return Err(MenuError::Validation(format!(
                        "item {} has an empty name",
                        item.id
                    )));
                }
                if !item.price.is_positive() {
                    return Err(MenuError::Validation(format!(
                        "item '{}' has non-positive price {}",
                        item.name, item.price
                    )));
                }
                if index.insert(item.id, (ci, ii)).is_some() {
                    return Err(MenuError::Validation(format!(
                        "duplicate item id {} ('{}')",
                        item.id, item.name
                    )));
                }
                if !seen_names.insert(item.name.to_lowercase()) {
                    return Err(MenuError::Validation(format!(
                        "duplicate item name '{}'",
                        item.name
                    )));
                }
            }
        }

        Ok(Self { categories, index })
    }

    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Looks up an item by id via the precomputed index.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.index
            .get(&id)
            .map(|&(ci, ii)| &self.categories[ci].items[ii])
    }

    /// Resolves an id or fails with the user-facing "Invalid item ID" error.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::UnknownItem`] when the id is not in the catalog.
    pub fn resolve(&self, id: u32) -> Result<&MenuItem, MenuError> {
        self.get(id).ok_or(MenuError::UnknownItem(id))
    }

    /// All items in catalog order (category order, then in-category order).
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Loads and validates the menu catalog from a YAML file.
///
/// # Errors
///
/// Returns `MenuError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_menu(path: &Path) -> Result<MenuCatalog, MenuError> {
    let content = std::fs::read_to_string(path).map_err(|e| MenuError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: MenuFile = serde_yaml::from_str(&content)?;
    MenuCatalog::from_categories(file.categories)
}
