//! # Ports
//!
//! Trait contracts for everything the engine and storefront talk to but
//! do not own:
//!
//! - `Randomness` - source for the random fallback draw
//! - `TeamDirectory` - persists and looks up team assignments
//! - `ProductCatalog` - lists merchandise per team
//! - `CartStore` - accumulates purchase intents
//!
//! Adapters in `crate::adapters` implement these.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::TeamCode;

// ============================================================================
// RANDOMNESS
// ============================================================================

/// Uniform index source
pub trait Randomness {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

// ============================================================================
// TEAM DIRECTORY
// ============================================================================

/// Team metadata shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub team: TeamCode,
    pub color: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("no team assigned to user {0:?}")]
    NotFound(String),

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Persists the final assignment keyed by username
pub trait TeamDirectory {
    /// Record (or overwrite) the user's team
    fn save(&mut self, username: &str, team: &TeamCode) -> DirectoryResult<()>;

    /// Team, color and logo for a user
    fn lookup(&self, username: &str) -> DirectoryResult<TeamProfile>;
}

// ============================================================================
// PRODUCT CATALOG
// ============================================================================

/// A piece of team merchandise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Whole rupees
    pub price: u64,
    pub image_url: String,
    pub team: TeamCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

pub trait ProductCatalog {
    /// Products branded for a team; empty if the team has none
    fn products_for(&self, team: &TeamCode) -> CatalogResult<Vec<Product>>;
}

// ============================================================================
// CART
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("no item {product_id:?} in cart of {username:?}")]
    ItemNotFound {
        username: String,
        product_id: String,
    },

    #[error("cart unavailable: {0}")]
    Unavailable(String),
}

pub type CartResult<T> = Result<T, CartError>;

pub trait CartStore {
    fn add(&mut self, username: &str, product: Product) -> CartResult<()>;

    /// Items in insertion order
    fn items(&self, username: &str) -> CartResult<Vec<Product>>;

    /// Remove one item by product id
    fn remove(&mut self, username: &str, product_id: &str) -> CartResult<Product>;
}

/// Sum of item prices
pub fn cart_total(items: &[Product]) -> u64 {
    items.iter().map(|p| p.price).sum()
}
