//! # Memory Storage Adapters
//!
//! In-memory collaborators using HashMap.
//! Fast, but volatile (data lost on shutdown).
//!
//! Good for:
//! - Testing
//! - Demos and local hosts
//! - Single-process deployments

use std::collections::HashMap;

use crate::core::{TeamCatalog, TeamCode};
use crate::ports::{
    CartError, CartResult, CartStore, CatalogResult, DirectoryError, DirectoryResult, Product,
    ProductCatalog, TeamDirectory, TeamProfile,
};

// ============================================================================
// DIRECTORY
// ============================================================================

/// In-memory team directory
pub struct MemoryDirectory {
    /// username -> team
    assignments: HashMap<String, TeamCode>,

    /// Team color shown on the dashboard
    colors: HashMap<TeamCode, String>,

    /// Team logo URL
    logos: HashMap<TeamCode, String>,
}

impl MemoryDirectory {
    /// Directory whose team colors come from the catalog.
    /// Logos default to `/logos/<code>.png`.
    pub fn from_catalog(catalog: &TeamCatalog) -> Self {
        let mut colors = HashMap::new();
        let mut logos = HashMap::new();

        for team in catalog.team_codes() {
            colors.insert(team.clone(), catalog.preferred_color(&team).to_string());
            logos.insert(
                team.clone(),
                format!("/logos/{}.png", team.as_str().to_lowercase()),
            );
        }

        Self {
            assignments: HashMap::new(),
            colors,
            logos,
        }
    }

    /// Override a team's logo URL
    pub fn with_logo(mut self, team: impl Into<TeamCode>, url: impl Into<String>) -> Self {
        self.logos.insert(team.into(), url.into());
        self
    }

    /// Number of users with an assignment
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl TeamDirectory for MemoryDirectory {
    fn save(&mut self, username: &str, team: &TeamCode) -> DirectoryResult<()> {
        if username.is_empty() {
            return Err(DirectoryError::EmptyUsername);
        }
        self.assignments.insert(username.to_string(), team.clone());
        Ok(())
    }

    fn lookup(&self, username: &str) -> DirectoryResult<TeamProfile> {
        let team = self
            .assignments
            .get(username)
            .ok_or_else(|| DirectoryError::NotFound(username.to_string()))?;

        Ok(TeamProfile {
            team: team.clone(),
            color: self.colors.get(team).cloned().unwrap_or_default(),
            logo: self.logos.get(team).cloned().unwrap_or_default(),
        })
    }
}

// ============================================================================
// PRODUCT CATALOG
// ============================================================================

/// In-memory product listing
#[derive(Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for MemoryCatalog {
    fn products_for(&self, team: &TeamCode) -> CatalogResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.team == *team)
            .cloned()
            .collect())
    }
}

// ============================================================================
// CART
// ============================================================================

/// In-memory carts keyed by username
#[derive(Default)]
pub struct MemoryCart {
    carts: HashMap<String, Vec<Product>>,
}

impl MemoryCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCart {
    fn add(&mut self, username: &str, product: Product) -> CartResult<()> {
        self.carts
            .entry(username.to_string())
            .or_default()
            .push(product);
        Ok(())
    }

    fn items(&self, username: &str) -> CartResult<Vec<Product>> {
        Ok(self.carts.get(username).cloned().unwrap_or_default())
    }

    fn remove(&mut self, username: &str, product_id: &str) -> CartResult<Product> {
        let not_found = || CartError::ItemNotFound {
            username: username.to_string(),
            product_id: product_id.to_string(),
        };

        let cart = self.carts.get_mut(username).ok_or_else(not_found)?;
        let pos = cart
            .iter()
            .position(|p| p.id == product_id)
            .ok_or_else(not_found)?;

        Ok(cart.remove(pos))
    }
}
