//! nebula-core - Core library for the Nebula Motors site
//!
//! Provides the navigation controller, scroll-driven header fade, reveal
//! animation specs, page content and site configuration. No DOM access here;
//! the web crate wires these into Leptos.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use anchor::Anchor;
pub use config::{RevealConfig, SiteConfig};
pub use contact::{ContactForm, ContactSubmitter, DiscardSubmitter};
pub use content::{catalog, Catalog};
pub use error::CoreError;
pub use nav::{AnchorScroller, NavController, NavOutcome};
pub use reveal::{Direction, HeroZoom, RevealSpec};
pub use scroll::{HeaderFade, Rgba, ScrollMetrics};
