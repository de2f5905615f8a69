//! Light/dark theme state
//!
//! The current theme lives in a context signal with a single writer,
//! the toggle button. Nothing here persists the choice across visits.

use leptos::*;

use crate::components::Icon;

/// Current visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set applied to the page wrapper.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "min-h-screen bg-white text-gray-900",
            Theme::Dark => "dark min-h-screen bg-gray-950 text-gray-100",
        }
    }
}

/// Wraps the page in the themed container and provides the theme
/// signal to every component below it.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = create_rw_signal(Theme::Dark);
    provide_context(theme);

    view! {
        <div class=move || theme.get().class()>
            {children()}
        </div>
    }
}

/// Button flipping between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="p-2 rounded-md border border-gray-300 dark:border-gray-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition"
            title="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            <Show
                when=move || theme.get() == Theme::Dark
                fallback=|| view! { <Icon id="moon"/> }
            >
                <Icon id="sun"/>
            </Show>
        </button>
    }
}
