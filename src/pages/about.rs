// About page - story, team, and contributor wall
use leptos::prelude::*;

use crate::sections::{AboutHero, AddWidgetSection, MeetTheTeam, Mission, OpenSourceCommunity};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <AboutHero />
        <Mission />
        <MeetTheTeam />
        <OpenSourceCommunity />
        <AddWidgetSection />
    }
}
