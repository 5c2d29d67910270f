//! **appglyph** — pick a status-bar glyph for a window.
//!
//! Given a window's title, class and instance, appglyph decides which
//! *app definition* the window belongs to and looks up that app's glyph in
//! a user-supplied mapping.
//!
//! # Architecture
//!
//! * [`registry`] — named predicates with priorities, frozen into a
//!   [`RuleRegistry`](registry::RuleRegistry) sorted for evaluation.
//! * [`definitions`] — the built-in app definitions.
//! * [`resolver`] — walks the registry and returns the first mapped glyph.
//! * [`config`] — the JSON glyph mapping and fallback glyph.
//! * [`traits::WindowSource`] — abstracts where window descriptors come
//!   from; [`ipc`] provides a JSON-lines implementation.
//!
//! ```
//! use appglyph::definitions::default_registry;
//! use appglyph::resolver::{resolve, GlyphMapping};
//! use appglyph::window::WindowDescriptor;
//!
//! let mut glyphs = GlyphMapping::new();
//! glyphs.insert("browser".into(), "B".into());
//! let window = WindowDescriptor::new().with_class("Firefox");
//! let glyph = resolve(default_registry().unwrap(), &window, &glyphs).unwrap();
//! assert_eq!(glyph, Some("B"));
//! ```

pub mod config;
pub mod definitions;
pub mod ipc;
pub mod registry;
pub mod resolver;
pub mod traits;
pub mod window;
