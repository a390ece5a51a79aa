// Landing page sections
// Markup follows the class/attribute contract in `interactions::contract`.

/// Product name used across the page
pub const BRAND: &str = "Soho";

mod features;
mod footer;
mod header;
mod nav;
mod operations;
mod signup;
mod testimonials;

pub use features::Features;
pub use footer::{Footer, ScrollTopButton};
pub use header::Header;
pub use nav::Nav;
pub use operations::Operations;
pub use signup::{Signup, SignupModal};
pub use testimonials::Testimonials;
