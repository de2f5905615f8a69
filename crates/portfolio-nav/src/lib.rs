//! Portfolio Navigation Core
//!
//! This crate provides the data model behind the site's navigation bar
//! and the layout engine that maps it into the desktop and mobile
//! presentation trees.

pub mod layout;
pub mod menu;

pub use layout::{layout, NavEntry, NavNode, RenderMode};
pub use menu::{GroupItem, IconToken, LinkItem, Menu, MenuError, MenuItem};
