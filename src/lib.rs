//! # Team Affinity
//!
//! > "Pick a city, pick a color, pick a style. Get a team."
//!
//! A four-step questionnaire that assigns a fan to a team, and the
//! storefront ports that sit around it.
//!
//! ## Philosophy
//!
//! - **Explicit session** - state is a value passed in and returned, never ambient
//! - **Pure transitions** - a rejected call leaves the session untouched
//! - **Injected randomness** - the fallback draw is seedable
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TEAM AFFINITY                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure, no I/O)                                        │
//! │    TeamCatalog, QuestionnaireSession, AffinityConfig        │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Randomness, TeamDirectory, ProductCatalog, CartStore     │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Random: Seeded, Thread                                   │
//! │    Storage: Memory                                          │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    AffinityEngine - the questionnaire                       │
//! │    Storefront - engine + collaborators                      │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use team_affinity::{AffinityEngine, TeamCatalog};
//!
//! let mut engine = AffinityEngine::new(TeamCatalog::ipl());
//!
//! let session = engine.start();
//! let session = engine.submit_city(&session, "Chennai").unwrap();
//! let session = engine.submit_color(&session, "yellow").unwrap();
//! let session = engine.submit_style(&session, "balanced").unwrap();
//!
//! assert_eq!(session.score(), 6);
//! let assignment = engine.finalize(&session, "ravi").unwrap();
//! assert_eq!(assignment.team.as_str(), "CSK");
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure types, no I/O
/// Contains: TeamCatalog, QuestionnaireSession, AffinityConfig, errors
pub mod core;

/// Port definitions - trait contracts for collaborators
/// Contains: Randomness, TeamDirectory, ProductCatalog, CartStore
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: random, storage, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: AffinityEngine, Storefront
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{QuestionnaireSession, Step, Style, TeamCatalog, TeamCode};
pub use crate::core::config::AffinityConfig;
pub use crate::core::error::{AffinityError, AffinityResult, ConfigError};

// Port traits
pub use crate::ports::{CartStore, ProductCatalog, Randomness, TeamDirectory};
pub use crate::ports::{Product, TeamProfile};

// Adapters
pub use crate::adapters::random::{SeededRandom, ThreadRandom};
pub use crate::adapters::storage::{MemoryCart, MemoryCatalog, MemoryDirectory};

// Engine
pub use crate::engine::{AffinityEngine, Assignment, HostState, Storefront, StorefrontError};
