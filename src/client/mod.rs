//! Client view over the info service.
//!
//! This module handles:
//! - The fetch lifecycle (`Loading` → `Success` | `Error`)
//! - Rendering of each state
//! - HTTP and mock payload sources

pub mod mock;
pub mod render;
pub mod source;
pub mod state;
pub mod view;

pub use mock::{MockConfig, MockEnvSource};
pub use render::render;
pub use source::{EnvSource, HttpEnvSource};
pub use state::{on_fetch_result, FetchPhase, FetchState, FETCH_ERROR_MESSAGE};
pub use view::ClientView;
