//! Site footer

use leptos::*;
use portfolio_nav::LinkItem;

use crate::components::Icon;
use crate::config::{self, LOGO, PROFILES};

#[component]
pub fn Footer() -> impl IntoView {
    // Depth-first flattening of the menu doubles as the quick-link list.
    let menu = config::site_menu();
    let quick_links = menu.links().map(footer_link).collect_view();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-800 py-10">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center gap-6">
                    <a href=LOGO.url class="flex items-center gap-2">
                        <span class="text-2xl">{LOGO.glyph}</span>
                        <span class="text-lg font-semibold">{LOGO.title}</span>
                    </a>
                    <nav class="flex flex-wrap justify-center gap-x-6 gap-y-2">
                        {quick_links}
                    </nav>
                    <div class="flex gap-3">
                        <a href=PROFILES.github title="GitHub" class="text-gray-500 hover:text-gray-900 dark:hover:text-gray-100 transition">
                            <Icon id="github"/>
                        </a>
                        <a href=PROFILES.linkedin title="LinkedIn" class="text-gray-500 hover:text-gray-900 dark:hover:text-gray-100 transition">
                            <Icon id="linkedin"/>
                        </a>
                    </div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {format!("© 2026 {}", LOGO.title)}
                    </p>
                </div>
            </div>
        </footer>
    }
}

fn footer_link(link: &LinkItem) -> View {
    view! {
        <a
            href=link.target().to_string()
            class="text-sm text-gray-500 hover:text-gray-900 dark:hover:text-gray-100 transition"
        >
            {link.title().to_string()}
        </a>
    }
    .into_view()
}
