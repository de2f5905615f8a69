//! Main application component

use leptos::*;
use leptos_router::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <ThemeProvider>
                <NavBar/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </ThemeProvider>
        </Router>
    }
}
