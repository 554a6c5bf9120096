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
// Complexity limits
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

//! Frame-sequence playback and point-identity tracking for time-series 3D
//! point clouds.
//!
//! Cloudscope holds a sequence of point-cloud frames, plays them back at a
//! configurable rate, resolves clicked coordinates to stable point indices
//! and extracts per-point trajectories for charting. Drawing is left to the
//! host: the engine only emits [`engine::RenderRequest`]s.
//!
//! # Key entry points
//!
//! - [`engine::VisualizerEngine`] - the session controller
//! - [`source::FrameLoader`] - background fetch of the frame sequence
//! - [`input::InputProcessor`] - host events to [`engine::Command`]s
//! - [`options::Options`] - runtime configuration (playback, picking,
//!   data source, key bindings)
//!
//! # Architecture
//!
//! Frames are fetched once at startup on a background thread and handed
//! back through a lock-free triple buffer. Once they arrive the host builds
//! a [`engine::VisualizerEngine`], calls
//! [`tick`](engine::VisualizerEngine::tick) every display refresh, forwards
//! user input through [`execute`](engine::VisualizerEngine::execute) and
//! applies the drained render requests.

pub mod animation;
pub mod engine;
pub mod error;
pub mod frame;
pub mod input;
pub mod options;
pub mod picking;
pub mod selection;
pub mod source;
pub mod util;
