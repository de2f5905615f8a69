//! Home page
//!
//! Single-page portfolio body. Section ids line up with the menu
//! targets so the navigation bar can point into the page.

use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section id="home" class="py-24">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-5xl md:text-6xl font-bold mb-6">
                        "Hi, I'm George"
                    </h1>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        "Software developer. I build things for the web, "
                        "and occasionally for research labs."
                    </p>
                </div>
            </section>

            // Work experiences
            <section id="internship-experiences" class="py-16 border-t border-gray-200 dark:border-gray-800">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold mb-10 text-center">"Work Experiences"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        <ExperienceCard
                            anchor="um-its"
                            title="University of Michigan ITS"
                            role="Software Development Intern"
                            summary="Internal tooling for campus IT services."
                        />
                        <ExperienceCard
                            anchor="sea-grant"
                            title="Wisconsin Sea Grant"
                            role="Software Development Intern"
                            summary="Data platforms for Great Lakes research."
                        />
                        <ExperienceCard
                            anchor="morgridge"
                            title="Morgridge Institute For Research"
                            role="Software Development Intern"
                            summary="Research software for biomedical science."
                        />
                    </div>
                </div>
            </section>

            // Projects
            <section id="projects" class="py-16 border-t border-gray-200 dark:border-gray-800">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold mb-10 text-center">"Projects"</h2>
                    <div class="max-w-xl mx-auto">
                        <ExperienceCard
                            anchor="yan-ling"
                            title="Yan Ling"
                            role="AI Chatbot"
                            summary="A conversational assistant built around a language model."
                        />
                    </div>
                </div>
            </section>

            // About
            <section id="about-me" class="py-16 border-t border-gray-200 dark:border-gray-800">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold mb-10 text-center">"About Me"</h2>
                    <div class="grid md:grid-cols-4 gap-8">
                        <AboutCard anchor="interests" title="Interests" body="My interests and hobbies."/>
                        <AboutCard anchor="life" title="Life" body="My life experiences."/>
                        <AboutCard anchor="travel" title="Travel" body="My travel experiences."/>
                        <AboutCard anchor="education" title="Education" body="My education experiences."/>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ExperienceCard(
    anchor: &'static str,
    title: &'static str,
    role: &'static str,
    summary: &'static str,
) -> impl IntoView {
    view! {
        <div id=anchor class="rounded-lg border border-gray-200 dark:border-gray-800 p-6">
            <h3 class="text-xl font-semibold mb-1">{title}</h3>
            <p class="text-sm font-medium text-gray-500 dark:text-gray-400 mb-3">{role}</p>
            <p class="text-gray-600 dark:text-gray-300">{summary}</p>
        </div>
    }
}

#[component]
fn AboutCard(anchor: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div id=anchor class="rounded-lg border border-gray-200 dark:border-gray-800 p-6 text-center">
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-600 dark:text-gray-300">{body}</p>
        </div>
    }
}
