//! Layout engine for the navigation bar
//!
//! Maps the menu into the presentation tree for one of the two
//! responsive modes. The mapping is pure and stateless; open/closed
//! state of panels and sections belongs to the components that consume
//! the tree.

use serde::Serialize;

use crate::menu::{IconToken, LinkItem, Menu, MenuItem};

/// Which responsive presentation to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    /// Dropdown panels in a horizontal bar, for wide viewports.
    Desktop,
    /// Accordion sections in a slide-out sheet, for narrow viewports.
    Mobile,
}

/// A rich entry inside a dropdown panel or accordion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: String,
    pub target: String,
    pub description: Option<String>,
    pub icon: Option<IconToken>,
}

impl From<&LinkItem> for NavEntry {
    fn from(link: &LinkItem) -> Self {
        NavEntry {
            title: link.title().to_string(),
            target: link.target().to_string(),
            description: link.description().map(str::to_string),
            icon: link.icon().cloned(),
        }
    }
}

/// One node of the rendered navigation tree.
///
/// `Dropdown` nodes only appear in desktop layouts and `Accordion`
/// nodes only in mobile ones; `Link` nodes appear in both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NavNode {
    /// Plain navigable entry with no expansion affordance.
    Link { title: String, target: String },
    /// Trigger revealing a panel of rich entries.
    Dropdown { title: String, entries: Vec<NavEntry> },
    /// Independently expandable section in the mobile sheet.
    Accordion { title: String, entries: Vec<NavEntry> },
}

/// Produce the presentation tree for `menu` in the given mode.
///
/// Total over every valid menu: links pass through unchanged in both
/// modes, groups become a dropdown or an accordion section carrying one
/// entry per child, in child order.
pub fn layout(menu: &Menu, mode: RenderMode) -> Vec<NavNode> {
    menu.items()
        .iter()
        .map(|item| match item {
            MenuItem::Link(link) => NavNode::Link {
                title: link.title().to_string(),
                target: link.target().to_string(),
            },
            MenuItem::Group(group) => {
                let title = group.title().to_string();
                let entries = group.children().iter().map(NavEntry::from).collect();
                match mode {
                    RenderMode::Desktop => NavNode::Dropdown { title, entries },
                    RenderMode::Mobile => NavNode::Accordion { title, entries },
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::GroupItem;

    fn flat_menu() -> Menu {
        Menu::new(vec![
            MenuItem::Link(LinkItem::new("Home", ".")),
            MenuItem::Link(LinkItem::new("Blog", "blog")),
            MenuItem::Link(LinkItem::new("Contact", "contact")),
        ])
        .unwrap()
    }

    fn portfolio_menu() -> Menu {
        let projects = GroupItem::new(
            "Projects",
            vec![LinkItem::new("Bird", "yan-ling")
                .with_description("AI Chatbot")
                .with_icon(IconToken::new("book"))],
        )
        .unwrap();
        Menu::new(vec![
            MenuItem::Link(LinkItem::new("Home", ".")),
            MenuItem::Group(projects),
        ])
        .unwrap()
    }

    #[test]
    fn flat_menu_renders_one_entry_per_item_in_order() {
        let menu = flat_menu();
        for mode in [RenderMode::Desktop, RenderMode::Mobile] {
            let nodes = layout(&menu, mode);
            assert_eq!(nodes.len(), 3);
            let titles: Vec<&str> = nodes
                .iter()
                .map(|node| match node {
                    NavNode::Link { title, .. } => title.as_str(),
                    other => panic!("flat item rendered as {other:?}"),
                })
                .collect();
            assert_eq!(titles, vec!["Home", "Blog", "Contact"]);
        }
    }

    #[test]
    fn single_link_renders_flat_in_both_modes() {
        let menu = Menu::new(vec![MenuItem::Link(LinkItem::new("Home", "."))]).unwrap();

        let expected = NavNode::Link {
            title: "Home".to_string(),
            target: ".".to_string(),
        };
        assert_eq!(layout(&menu, RenderMode::Desktop), vec![expected.clone()]);
        assert_eq!(layout(&menu, RenderMode::Mobile), vec![expected]);
    }

    #[test]
    fn desktop_group_becomes_dropdown_with_all_children() {
        let children = vec![
            LinkItem::new("One", "one").with_description("first"),
            LinkItem::new("Two", "two"),
            LinkItem::new("Three", "three").with_description("third"),
        ];
        let menu = Menu::new(vec![MenuItem::Group(
            GroupItem::new("Work", children).unwrap(),
        )])
        .unwrap();

        let nodes = layout(&menu, RenderMode::Desktop);
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            NavNode::Dropdown { title, entries } => {
                assert_eq!(title, "Work");
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[0].description.as_deref(), Some("first"));
                assert_eq!(entries[1].description, None);
                assert_eq!(entries[2].title, "Three");
            }
            other => panic!("group rendered as {other:?}"),
        }
    }

    #[test]
    fn mobile_group_becomes_accordion_with_all_children() {
        let menu = portfolio_menu();
        let nodes = layout(&menu, RenderMode::Mobile);
        match &nodes[1] {
            NavNode::Accordion { title, entries } => {
                assert_eq!(title, "Projects");
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].title, "Bird");
                assert_eq!(entries[0].target, "yan-ling");
                assert_eq!(entries[0].description.as_deref(), Some("AI Chatbot"));
                assert_eq!(entries[0].icon.as_ref().map(IconToken::id), Some("book"));
            }
            other => panic!("group rendered as {other:?}"),
        }
    }

    #[test]
    fn desktop_group_panel_matches_mobile_section() {
        // Same payload behind both disclosures, only the node kind differs.
        let menu = portfolio_menu();
        let desktop = layout(&menu, RenderMode::Desktop);
        let mobile = layout(&menu, RenderMode::Mobile);
        match (&desktop[1], &mobile[1]) {
            (
                NavNode::Dropdown { entries: d, .. },
                NavNode::Accordion { entries: m, .. },
            ) => assert_eq!(d, m),
            other => panic!("unexpected node pair {other:?}"),
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let menu = portfolio_menu();
        let first = layout(&menu, RenderMode::Desktop);
        let second = layout(&menu, RenderMode::Desktop);
        assert_eq!(first, second);
    }

    #[test]
    fn desktop_render_does_not_disturb_a_later_mobile_render() {
        let menu = portfolio_menu();
        let fresh_mobile = layout(&portfolio_menu(), RenderMode::Mobile);

        let _ = layout(&menu, RenderMode::Desktop);
        assert_eq!(layout(&menu, RenderMode::Mobile), fresh_mobile);
    }
}
