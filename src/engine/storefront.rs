//! # Storefront
//!
//! Host-side orchestration around the affinity engine.
//!
//! This struct wires together:
//! - The engine (questionnaire and scoring)
//! - TeamDirectory (persisting the assignment)
//! - ProductCatalog and CartStore (merchandise)
//!
//! The engine never sees a collaborator. Saving happens here, after
//! `finalize`, and a failed save is retried without rescoring.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::storage::{MemoryCart, MemoryCatalog, MemoryDirectory};
use crate::core::{AffinityError, QuestionnaireSession, TeamCode};
use crate::engine::AffinityEngine;
use crate::ports::{
    cart_total, CartError, CartStore, CatalogError, DirectoryError, Product, ProductCatalog,
    TeamDirectory, TeamProfile,
};

/// Static image shown in place of a payment flow
pub const CHECKOUT_PLACEHOLDER: &str = "/static/checkout-qr.png";

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Affinity(#[from] AffinityError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    /// No confirmed or restored assignment to browse with
    #[error("no team assignment; confirm a questionnaire or restore host state")]
    NoAssignment,
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Last-known user and team, persisted by the host so a returning user
/// skips the questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    pub username: String,
    pub team: TeamCode,
}

/// Team profile plus its merchandise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub profile: TeamProfile,
    pub products: Vec<Product>,
}

/// Cart contents with the running total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub items: Vec<Product>,
    pub total: u64,
}

pub struct Storefront {
    engine: AffinityEngine,
    directory: Box<dyn TeamDirectory>,
    products: Box<dyn ProductCatalog>,
    cart: Box<dyn CartStore>,
    host_state: Option<HostState>,
}

impl Storefront {
    /// Storefront backed by in-memory adapters
    pub fn new(engine: AffinityEngine) -> Self {
        let directory = Box::new(MemoryDirectory::from_catalog(engine.catalog()));
        Self::with_adapters(
            engine,
            directory,
            Box::new(MemoryCatalog::new()),
            Box::new(MemoryCart::new()),
        )
    }

    /// Create with custom adapters
    pub fn with_adapters(
        engine: AffinityEngine,
        directory: Box<dyn TeamDirectory>,
        products: Box<dyn ProductCatalog>,
        cart: Box<dyn CartStore>,
    ) -> Self {
        Self {
            engine,
            directory,
            products,
            cart,
            host_state: None,
        }
    }

    pub fn engine(&self) -> &AffinityEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AffinityEngine {
        &mut self.engine
    }

    // ========================================================================
    // ASSIGNMENT
    // ========================================================================

    /// Finalize the session and save the team for `username`.
    ///
    /// On a directory failure the session is still valid; call again.
    pub fn confirm(
        &mut self,
        session: &QuestionnaireSession,
        username: &str,
    ) -> StorefrontResult<TeamCode> {
        let assignment = self.engine.finalize(session, username)?;

        if let Err(e) = self.directory.save(&assignment.username, &assignment.team) {
            warn!(username, error = %e, "failed to save team assignment");
            return Err(e.into());
        }

        info!(username, team = %assignment.team, "team assignment saved");
        self.host_state = Some(HostState {
            username: assignment.username,
            team: assignment.team.clone(),
        });
        Ok(assignment.team)
    }

    /// State the host should persist after a successful `confirm`
    pub fn host_state(&self) -> Option<&HostState> {
        self.host_state.as_ref()
    }

    /// Re-enter with previously persisted host state
    pub fn restore(&mut self, state: HostState) {
        self.host_state = Some(state);
    }

    // ========================================================================
    // CATALOG
    // ========================================================================

    pub fn dashboard(&self, username: &str) -> StorefrontResult<Dashboard> {
        let profile = self.directory.lookup(username).map_err(|e| {
            warn!(username, error = %e, "team lookup failed");
            e
        })?;
        let products = self.products.products_for(&profile.team)?;

        Ok(Dashboard { profile, products })
    }

    /// Products for the last-known team, without a directory lookup.
    /// This is how a returning user re-enters the catalog.
    pub fn products(&self) -> StorefrontResult<Vec<Product>> {
        let state = self.host_state.as_ref().ok_or(StorefrontError::NoAssignment)?;
        Ok(self.products.products_for(&state.team)?)
    }

    // ========================================================================
    // CART
    // ========================================================================

    pub fn add_to_cart(&mut self, username: &str, product: Product) -> StorefrontResult<()> {
        self.cart.add(username, product)?;
        Ok(())
    }

    pub fn cart(&self, username: &str) -> StorefrontResult<CartSummary> {
        let items = self.cart.items(username)?;
        let total = cart_total(&items);
        Ok(CartSummary { items, total })
    }

    pub fn remove_from_cart(&mut self, username: &str, product_id: &str) -> StorefrontResult<Product> {
        Ok(self.cart.remove(username, product_id)?)
    }

    /// Checkout stand-in; no payment is taken
    pub fn checkout_placeholder(&self) -> &'static str {
        CHECKOUT_PLACEHOLDER
    }
}
