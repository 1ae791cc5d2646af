use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::common::{Emphasize, Section};
use crate::contributors::{CONTRIBUTORS_URL, Contributor, FetchState, fetch_contributors};
use crate::motion::FadeIn;

/// Contributor wall. Issues one fetch on mount; the list mirrors the most
/// recent successful response. Loading, loaded, empty, and failed each get
/// their own rendering.
#[component]
pub fn OpenSourceCommunity() -> impl IntoView {
    let (state, set_state) = signal(FetchState::Loading);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let state = FetchState::from_result(fetch_contributors(CONTRIBUTORS_URL).await);
            if let FetchState::Failed(reason) = &state {
                web_sys::console::error_1(&JsValue::from_str(&format!(
                    "contributor fetch failed: {reason}"
                )));
            }
            // No-op if the page navigated away before the response arrived.
            let _ = set_state.try_set(state);
        });
    });

    view! {
        <Section title="Open Source Community">
            <FadeIn delay=2>
                <p class="section-lead">
                    <Emphasize>"Review App"</Emphasize>
                    " thrives on collaboration. Our open-source community of developers "
                    "and contributors is what makes this project possible. "
                    <Emphasize>"Join us"</Emphasize>
                    " and "
                    <Emphasize>"contribute"</Emphasize>
                    " to making website reviews better for all."
                </p>
            </FadeIn>
            {move || match state.get() {
                FetchState::Loading => {
                    view! { <p class="community-status">"Loading contributors…"</p> }.into_any()
                }
                FetchState::Empty => {
                    view! { <p class="community-status">"No contributors yet."</p> }.into_any()
                }
                FetchState::Failed(_) => {
                    view! {
                        <p class="community-status community-error">
                            "Couldn't load contributors."
                        </p>
                    }
                        .into_any()
                }
                FetchState::Loaded(contributors) => {
                    view! { <ContributorGrid contributors=contributors /> }.into_any()
                }
            }}
        </Section>
    }
}

#[component]
fn ContributorGrid(contributors: Vec<Contributor>) -> impl IntoView {
    view! {
        <div class="community-grid">
            {contributors
                .into_iter()
                .enumerate()
                .map(|(index, contributor)| {
                    let delay = index as u32;
                    view! {
                        <FadeIn delay=delay>
                            <a
                                href=contributor.profile_link.clone()
                                target="_blank"
                                class="contributor"
                            >
                                <span class="contributor-avatar-ring">
                                    <img
                                        src=contributor.avatar.clone()
                                        alt=contributor.username.clone()
                                        class="contributor-avatar"
                                    />
                                </span>
                                <p class="contributor-name">{contributor.username.clone()}</p>
                            </a>
                        </FadeIn>
                    }
                })
                .collect_view()}
        </div>
    }
}
