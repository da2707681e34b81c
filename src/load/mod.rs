//! Loading and unloading of scene objects as the view changes.
//!
//! The loader itself is external ([`ObjectLoader`]); this module decides
//! what to ask it for ([`LoadPolicy`], [`LoadPlan`]) and how often
//! ([`ViewChangeNotifier`]).

/// Loader collaborator interface.
pub mod loader;
/// Coalescing of per-frame motion into notifications.
pub mod notifier;
/// Load plans and the policy that produces them.
pub mod plan;

pub use loader::{ObjectId, ObjectLoader};
pub use notifier::ViewChangeNotifier;
pub use plan::{Eviction, LoadPlan, LoadPolicy};
