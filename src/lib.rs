// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interchangeable camera controls for a 3D city viewer.
//!
//! A [`controls::CameraControls`] session owns the camera and runs one
//! control mode at a time: first-person walk, pointer-lock free-fly, a
//! top-down key-pan view, or an RTS-style edge-pan view. Modes turn raw
//! input into camera motion, keep the eye pinned above the floor, and tell
//! the host's object loader what to fetch and what to hide as the view
//! moves.
//!
//! # Key entry points
//!
//! - [`controls::CameraControls`] - the session: activate a mode, forward
//!   input and animation frames
//! - [`controls::ModeKind`] - the available control modes
//! - [`options::Options`] - per-mode speeds and bounds, loading distances,
//!   keybindings (TOML presets)
//! - [`camera`] - camera state, viewport queries and ray helpers
//! - [`load`] - the loader contract and the load policy
//!
//! # Host integration
//!
//! The host supplies three collaborators: a [`controls::Platform`] (input
//! listeners, animation frames, pointer lock), an [`load::ObjectLoader`]
//! (fetches and hides scene objects) and a [`camera::FloorProbe`] (surface
//! height queries). With the `web` feature, `web::BrowserPlatform`
//! implements the platform on top of the DOM.

pub mod camera;
pub mod controls;
pub mod error;
pub mod input;
pub mod load;
pub mod options;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod testing;

pub use camera::{CameraState, FloorProbe, Ray, ViewRect, Viewport};
pub use controls::{CameraControls, ControlMode, ModeKind, MotionStatus, Platform};
pub use error::ControlsError;
pub use input::InputEvent;
pub use load::{ObjectId, ObjectLoader};
pub use options::Options;
