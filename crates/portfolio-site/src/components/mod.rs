//! Site components

mod footer;
mod icons;
mod nav;
mod theme;

pub use footer::Footer;
pub use icons::Icon;
pub use nav::NavBar;
pub use theme::{Theme, ThemeProvider, ThemeToggle};
