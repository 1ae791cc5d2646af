// Review App marketing site — Leptos 0.8 CSR

mod content;
mod contributors;
mod motion;
mod pages;
mod sections;
mod viewport;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{AboutPage, HomePage};
use sections::{Background, Footer, Header};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Background />
            <Header />
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
