//! Reelgrid Web - Search widget surface

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Models the page the widget lives in: a text input, a search trigger and
//! an output container of rendered nodes. The UI surface is injected into the
//! controller so the whole flow runs without a browser.

pub mod container;
pub mod controller;
pub mod dom;
pub mod generation;
pub mod page;
pub mod renderer;

// Re-export main types
pub use container::OutputContainer;
pub use controller::{InputController, SearchInput, SearchSurface, UiEvent};
pub use dom::Element;
pub use generation::{GenerationToken, SearchGeneration};
pub use page::{render_page, render_text};
pub use renderer::Renderer;
