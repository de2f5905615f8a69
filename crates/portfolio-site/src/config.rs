//! Static site configuration
//!
//! The navigation structure, logo, and profile links are fixed at build
//! time. A malformed menu here is a defect caught as soon as the site
//! starts, never something a visitor sees.

use portfolio_nav::{GroupItem, IconToken, LinkItem, Menu, MenuItem};

/// Logo block shown at the left of the bar and atop the mobile sheet.
pub struct Logo {
    pub url: &'static str,
    pub glyph: &'static str,
    pub title: &'static str,
}

pub const LOGO: Logo = Logo {
    url: "/",
    glyph: "💻",
    title: "George Zeng",
};

/// External profile links shown as icon buttons.
pub struct Profiles {
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILES: Profiles = Profiles {
    github: "https://github.com/georgezzeng",
    linkedin: "https://www.linkedin.com/in/george-zeng-4a28b6259/",
};

/// The full navigation menu.
pub fn site_menu() -> Menu {
    let book = || IconToken::new("book");

    Menu::new(vec![
        MenuItem::Link(LinkItem::new("Home", "home")),
        group(
            "Work Experiences",
            vec![
                LinkItem::new("University of Michigan ITS", "um-its")
                    .with_description("Software Development Intern")
                    .with_icon(book()),
                LinkItem::new("Wisconsin Sea Grant", "sea-grant")
                    .with_description("Software Development Intern")
                    .with_icon(book()),
                LinkItem::new("Morgridge Institute For Research", "morgridge")
                    .with_description("Software Development Intern")
                    .with_icon(book()),
            ],
        ),
        group(
            "Projects",
            vec![LinkItem::new("Yan Ling", "yan-ling")
                .with_description("AI Chatbot")
                .with_icon(book())],
        ),
        group(
            "About Me",
            vec![
                LinkItem::new("Interests", "interests")
                    .with_description("My interests and hobbies")
                    .with_icon(book()),
                LinkItem::new("Life", "life")
                    .with_description("My life experiences")
                    .with_icon(book()),
                LinkItem::new("Travel", "travel")
                    .with_description("My travel experiences")
                    .with_icon(book()),
                LinkItem::new("Education", "education")
                    .with_description("My education experiences")
                    .with_icon(book()),
            ],
        ),
    ])
    .expect("static menu is well formed")
}

fn group(title: &str, children: Vec<LinkItem>) -> MenuItem {
    MenuItem::Group(GroupItem::new(title, children).expect("static group is well formed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_nav::{layout, NavNode, RenderMode};

    #[test]
    fn site_menu_is_well_formed() {
        let menu = site_menu();
        assert_eq!(menu.items().len(), 4);
        assert_eq!(menu.links().count(), 9);
    }

    #[test]
    fn site_menu_lays_out_in_both_modes() {
        let menu = site_menu();
        let desktop = layout(&menu, RenderMode::Desktop);
        let mobile = layout(&menu, RenderMode::Mobile);
        assert_eq!(desktop.len(), mobile.len());

        // "Home" stays flat, the three groups get a disclosure each.
        assert!(matches!(desktop[0], NavNode::Link { .. }));
        assert!(matches!(mobile[0], NavNode::Link { .. }));
        for node in &desktop[1..] {
            assert!(matches!(node, NavNode::Dropdown { .. }));
        }
        for node in &mobile[1..] {
            assert!(matches!(node, NavNode::Accordion { .. }));
        }
    }
}
