//! Inline SVG icons
//!
//! Resolves the opaque icon tokens carried by the menu into glyphs.
//! Unknown tokens render nothing.

use leptos::*;

const GITHUB: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";

const LINKEDIN: &str = "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z";

/// Render the glyph for an icon token.
#[component]
pub fn Icon(#[prop(into)] id: String) -> impl IntoView {
    match id.as_str() {
        "menu" => stroke_icon("M4 6h16M4 12h16M4 18h16"),
        "close" => stroke_icon("M6 18L18 6M6 6l12 12"),
        "chevron" => stroke_icon("m6 9 6 6 6-6"),
        "book" => stroke_icon("M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"),
        "sun" => stroke_icon(
            "M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z",
        ),
        "moon" => stroke_icon(
            "M21.752 15.002A9.72 9.72 0 0118 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 003 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 009.002-5.998z",
        ),
        "github" => fill_icon(GITHUB),
        "linkedin" => fill_icon(LINKEDIN),
        _ => ().into_view(),
    }
}

fn stroke_icon(d: &'static str) -> View {
    view! {
        <svg class="h-5 w-5 shrink-0" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round" d=d/>
        </svg>
    }
    .into_view()
}

fn fill_icon(d: &'static str) -> View {
    view! {
        <svg class="h-5 w-5 shrink-0" viewBox="0 0 24 24" fill="currentColor">
            <path d=d/>
        </svg>
    }
    .into_view()
}
