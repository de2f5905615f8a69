//! Navigation bar
//!
//! Desktop dropdown navigation and the mobile slide-out sheet, both
//! driven by the same menu through the layout engine.

use leptos::*;
use portfolio_nav::{layout, NavEntry, NavNode, RenderMode};

use crate::components::{Icon, ThemeToggle};
use crate::config::{self, LOGO, PROFILES};

#[component]
pub fn NavBar() -> impl IntoView {
    let (sheet_open, set_sheet_open) = create_signal(false);

    let desktop_nodes = layout(&config::site_menu(), RenderMode::Desktop);

    view! {
        <section class="py-4 border-b border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4">
                // Desktop menu
                <nav class="hidden lg:flex items-center justify-between">
                    <div class="flex items-center gap-6">
                        <LogoLink/>
                        <div class="flex items-center gap-1">
                            {desktop_nodes.into_iter().map(desktop_node).collect_view()}
                        </div>
                    </div>
                    <div class="flex items-center gap-2 ml-auto">
                        <ThemeToggle/>
                        <ProfileButtons/>
                    </div>
                </nav>

                // Mobile menu
                <div class="block lg:hidden">
                    <div class="flex items-center justify-between">
                        <LogoLink/>
                        <button
                            class="p-2 rounded-md border border-gray-300 dark:border-gray-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                            on:click=move |_| set_sheet_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || sheet_open.get()
                                fallback=|| view! { <Icon id="menu"/> }
                            >
                                <Icon id="close"/>
                            </Show>
                        </button>
                    </div>
                    <Show when=move || sheet_open.get()>
                        <MobileSheet/>
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Slide-out sheet holding the accordion-rendered menu.
#[component]
fn MobileSheet() -> impl IntoView {
    let nodes = layout(&config::site_menu(), RenderMode::Mobile);

    view! {
        <div class="fixed inset-y-0 right-0 z-50 w-80 overflow-y-auto border-l border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-950 shadow-xl">
            <div class="p-4 border-b border-gray-200 dark:border-gray-800">
                <LogoLink/>
            </div>
            <div class="flex flex-col gap-6 p-4">
                <div class="flex flex-col gap-4">
                    {nodes.into_iter().map(mobile_node).collect_view()}
                </div>
                <div class="flex justify-center gap-3">
                    <ThemeToggle/>
                    <ProfileButtons/>
                </div>
            </div>
        </div>
    }
}

/// One expandable section of the mobile sheet. Sections expand and
/// collapse independently of each other.
#[component]
fn AccordionSection(title: String, entries: Vec<NavEntry>) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);
    let entry_views = entries.into_iter().map(sub_entry).collect_view();

    view! {
        <div>
            <button
                class="flex w-full items-center justify-between py-2 text-md font-semibold"
                on:click=move |_| set_expanded.update(|v| *v = !*v)
            >
                {title}
                <span class=move || {
                    if expanded.get() {
                        "rotate-180 transition-transform"
                    } else {
                        "transition-transform"
                    }
                }>
                    <Icon id="chevron"/>
                </span>
            </button>
            <Show when=move || expanded.get()>
                <div class="mt-2 flex flex-col">{entry_views.clone()}</div>
            </Show>
        </div>
    }
}

fn desktop_node(node: NavNode) -> View {
    match node {
        NavNode::Link { title, target } => view! {
            <a
                href=target
                class="inline-flex h-10 items-center rounded-md px-4 py-2 text-sm font-medium text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition"
            >
                {title}
            </a>
        }
        .into_view(),
        NavNode::Dropdown { title, entries } => view! {
            <div class="relative group">
                <button class="inline-flex h-10 items-center gap-1 rounded-md px-4 py-2 text-sm font-medium text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition">
                    {title}
                    <Icon id="chevron"/>
                </button>
                <div class="absolute left-0 top-full hidden w-80 rounded-md border border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-950 p-2 shadow-lg group-hover:block">
                    {entries.into_iter().map(sub_entry).collect_view()}
                </div>
            </div>
        }
        .into_view(),
        // not produced in desktop mode
        NavNode::Accordion { .. } => ().into_view(),
    }
}

fn mobile_node(node: NavNode) -> View {
    match node {
        NavNode::Link { title, target } => view! {
            <a href=target class="py-2 text-md font-semibold">
                {title}
            </a>
        }
        .into_view(),
        NavNode::Accordion { title, entries } => {
            view! { <AccordionSection title=title entries=entries/> }.into_view()
        }
        // not produced in mobile mode
        NavNode::Dropdown { .. } => ().into_view(),
    }
}

/// Rich entry shown inside a dropdown panel or accordion section.
fn sub_entry(entry: NavEntry) -> View {
    let NavEntry {
        title,
        target,
        description,
        icon,
    } = entry;

    view! {
        <a
            href=target
            class="flex flex-row gap-4 rounded-md p-3 no-underline transition hover:bg-gray-100 dark:hover:bg-gray-800"
        >
            {icon.map(|icon| view! { <Icon id=icon.id().to_string()/> })}
            <div>
                <div class="text-sm font-semibold">{title}</div>
                {description.map(|d| view! {
                    <p class="text-sm leading-snug text-gray-500 dark:text-gray-400">{d}</p>
                })}
            </div>
        </a>
    }
    .into_view()
}

#[component]
fn LogoLink() -> impl IntoView {
    view! {
        <a href=LOGO.url class="flex items-center gap-2">
            <span class="text-2xl">{LOGO.glyph}</span>
            <span class="text-lg font-semibold">{LOGO.title}</span>
        </a>
    }
}

#[component]
fn ProfileButtons() -> impl IntoView {
    view! {
        <a
            href=PROFILES.github
            title="GitHub"
            class="p-2 rounded-md border border-gray-300 dark:border-gray-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition"
        >
            <Icon id="github"/>
        </a>
        <a
            href=PROFILES.linkedin
            title="LinkedIn"
            class="p-2 rounded-md border border-gray-300 dark:border-gray-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition"
        >
            <Icon id="linkedin"/>
        </a>
    }
}
