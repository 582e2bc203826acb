//! Leptos UI components

mod header;
mod icons;
mod reveal;

pub use header::Header;
pub use icons::{ChevronRightIcon, CloseIcon, FeatureIconView, MenuIcon, QuoteMark, StarIcon};
pub use reveal::{reveal_spec, Intro, Reveal};
