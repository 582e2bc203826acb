//! Page sections, top to bottom

mod about;
mod contact;
mod footer;
mod hero;
mod models;
mod technology;
mod testimonials;

pub use about::About;
pub use contact::{Contact, SubmitterContext};
pub use footer::Footer;
pub use hero::Hero;
pub use models::Models;
pub use technology::Technology;
pub use testimonials::Testimonials;
