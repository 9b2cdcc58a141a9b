//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! ListingEntry → ItemView ─┬→ render_item → element tree
//!                          └→ UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`item_view`]: Derived row state ([`ItemView`], [`ActionState`])
//! - [`tree`]: Rendered element tree and query helpers
//! - [`viewmodel`]: View model types for the whole pane
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers (row tree, row painter, chrome)
//! - [`helpers`]: Output buffer and text fitting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod item_view;
pub mod renderer;
pub mod theme;
pub mod tree;
pub mod viewmodel;

pub use components::render_item;
pub use item_view::{ActionState, Description, Gesture, Icon, ItemView, UpdatePrompt};
pub use renderer::render;
pub use theme::Theme;
pub use tree::{Element, Node, Tag};
pub use viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
