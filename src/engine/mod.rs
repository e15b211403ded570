//! # Engine
//!
//! The orchestration layer.
//!
//! This is where:
//! - The questionnaire transitions and scoring live (`AffinityEngine`)
//! - Collaborator adapters are connected to the engine's output (`Storefront`)

mod affinity;
mod storefront;

pub use affinity::{AffinityEngine, Assignment};
pub use storefront::{
    CartSummary, Dashboard, HostState, Storefront, StorefrontError, StorefrontResult,
    CHECKOUT_PLACEHOLDER,
};
