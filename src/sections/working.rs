use leptos::prelude::*;

use super::common::{Emphasize, Section};
use crate::content::{HOW_IT_WORKS, WorkStepInfo};
use crate::motion::{Direction, InFromXAxis};

#[component]
pub fn WorkingSection() -> impl IntoView {
    view! {
        <Section title="How it Works">
            <InFromXAxis direction=Direction::Left delay=2>
                <p class="section-lead">
                    "You can start getting "
                    <Emphasize>"review"</Emphasize>
                    " of your app in few steps"
                </p>
            </InFromXAxis>
            <div class="working-grid">
                {HOW_IT_WORKS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        // Alternate the slide direction per row.
                        let direction = if index % 2 == 0 {
                            Direction::Left
                        } else {
                            Direction::Right
                        };
                        let delay = index as u32;
                        let number = index as u32 + 1;
                        let step = *step;
                        view! {
                            <InFromXAxis direction=direction delay=delay class="work-slot">
                                <WorkStep number=number step=step />
                            </InFromXAxis>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn WorkStep(number: u32, step: WorkStepInfo) -> impl IntoView {
    view! {
        <div class="work-step">
            <span class="work-step-number">{number}</span>
            <div class="work-step-shot">
                <img src=step.image alt=step.title class="work-step-image" />
            </div>
            <div class="work-step-body">
                <h3 class="work-step-title">{step.title}</h3>
                <p class="work-step-description">{step.description}</p>
            </div>
        </div>
    }
}
