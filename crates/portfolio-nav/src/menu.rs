//! Navigation menu data model
//!
//! The menu is built once from static configuration and never mutated
//! afterwards. An item is either a plain link or a group of links shown
//! behind an expandable trigger; groups are exactly one level deep.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("group \"{0}\" has no children")]
    EmptyGroup(String),

    #[error("duplicate sibling title \"{0}\"")]
    DuplicateTitle(String),
}

/// Opaque handle for an icon asset.
///
/// The model and the layout engine never look inside it; the site's
/// icon component resolves the identifier to a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconToken(String);

impl IconToken {
    pub fn new(id: impl Into<String>) -> Self {
        IconToken(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A directly navigable entry.
///
/// `description` and `icon` only surface when the link sits inside a
/// group's panel; top-level links render as bare titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    title: String,
    target: String,
    description: Option<String>,
    icon: Option<IconToken>,
}

impl LinkItem {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        LinkItem {
            title: title.into(),
            target: target.into(),
            description: None,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: IconToken) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Option<&IconToken> {
        self.icon.as_ref()
    }
}

/// An expandable trigger holding one or more links.
///
/// Fields are private and the constructor validates, so a `GroupItem`
/// in hand always renders to a trigger plus at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupItem {
    title: String,
    children: Vec<LinkItem>,
}

impl GroupItem {
    /// Build a group. Rejects an empty child list and duplicate child
    /// titles; both are configuration defects, not runtime conditions.
    pub fn new(title: impl Into<String>, children: Vec<LinkItem>) -> Result<Self, MenuError> {
        let title = title.into();
        if children.is_empty() {
            return Err(MenuError::EmptyGroup(title));
        }
        check_unique(children.iter().map(LinkItem::title))?;
        Ok(GroupItem { title, children })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Children in display order.
    pub fn children(&self) -> &[LinkItem] {
        &self.children
    }
}

/// One top-level entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MenuItem {
    Link(LinkItem),
    Group(GroupItem),
}

impl MenuItem {
    pub fn title(&self) -> &str {
        match self {
            MenuItem::Link(link) => link.title(),
            MenuItem::Group(group) => group.title(),
        }
    }
}

/// The full navigation structure, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Rejects duplicate top-level titles. Child lists were already
    /// validated by [`GroupItem::new`].
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        check_unique(items.iter().map(MenuItem::title))?;
        Ok(Menu { items })
    }

    /// Top-level items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Every navigable link, depth first, in display order.
    pub fn links(&self) -> impl Iterator<Item = &LinkItem> {
        self.items.iter().flat_map(|item| match item {
            MenuItem::Link(link) => std::slice::from_ref(link).iter(),
            MenuItem::Group(group) => group.children.iter(),
        })
    }
}

fn check_unique<'a>(titles: impl Iterator<Item = &'a str>) -> Result<(), MenuError> {
    let mut seen: Vec<&str> = Vec::new();
    for title in titles {
        if seen.contains(&title) {
            return Err(MenuError::DuplicateTitle(title.to_string()));
        }
        seen.push(title);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_children() -> Vec<LinkItem> {
        vec![
            LinkItem::new("Bird", "yan-ling")
                .with_description("AI Chatbot")
                .with_icon(IconToken::new("book")),
            LinkItem::new("Fish", "fish"),
        ]
    }

    #[test]
    fn link_builder_sets_optional_fields() {
        let link = LinkItem::new("Bird", "yan-ling")
            .with_description("AI Chatbot")
            .with_icon(IconToken::new("book"));
        assert_eq!(link.title(), "Bird");
        assert_eq!(link.target(), "yan-ling");
        assert_eq!(link.description(), Some("AI Chatbot"));
        assert_eq!(link.icon().map(IconToken::id), Some("book"));
    }

    #[test]
    fn group_rejects_empty_children() {
        let err = GroupItem::new("Projects", vec![]).unwrap_err();
        assert_eq!(err, MenuError::EmptyGroup("Projects".to_string()));
    }

    #[test]
    fn group_rejects_duplicate_child_titles() {
        let children = vec![
            LinkItem::new("Bird", "yan-ling"),
            LinkItem::new("Bird", "other"),
        ];
        let err = GroupItem::new("Projects", children).unwrap_err();
        assert_eq!(err, MenuError::DuplicateTitle("Bird".to_string()));
    }

    #[test]
    fn group_preserves_child_order() {
        let group = GroupItem::new("Projects", sample_children()).unwrap();
        let titles: Vec<&str> = group.children().iter().map(LinkItem::title).collect();
        assert_eq!(titles, vec!["Bird", "Fish"]);
    }

    #[test]
    fn menu_rejects_duplicate_top_level_titles() {
        let items = vec![
            MenuItem::Link(LinkItem::new("Home", ".")),
            MenuItem::Link(LinkItem::new("Home", "elsewhere")),
        ];
        let err = Menu::new(items).unwrap_err();
        assert_eq!(err, MenuError::DuplicateTitle("Home".to_string()));
    }

    #[test]
    fn links_traversal_is_depth_first_in_display_order() {
        let menu = Menu::new(vec![
            MenuItem::Link(LinkItem::new("Home", ".")),
            MenuItem::Group(GroupItem::new("Projects", sample_children()).unwrap()),
            MenuItem::Link(LinkItem::new("Contact", "contact")),
        ])
        .unwrap();

        let titles: Vec<&str> = menu.links().map(LinkItem::title).collect();
        assert_eq!(titles, vec!["Home", "Bird", "Fish", "Contact"]);
    }
}
