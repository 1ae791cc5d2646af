use leptos::prelude::*;

use super::common::{Emphasize, Section};
use crate::content::{TEAM, TeamMember};
use crate::motion::{Direction, InFromXAxis};

#[component]
pub fn MeetTheTeam() -> impl IntoView {
    view! {
        <Section title="Meet The Team">
            <InFromXAxis direction=Direction::Left delay=2>
                <p class="section-lead">
                    "Our dedicated "
                    <Emphasize>"team"</Emphasize>
                    " brings diverse skills and backgrounds to the table, united by a "
                    "shared goal: to simplify "
                    <Emphasize>"review management"</Emphasize>
                    " for website owners."
                </p>
            </InFromXAxis>
            <div class="team-grid">
                {TEAM
                    .iter()
                    .enumerate()
                    .map(|(index, member)| {
                        let direction = if index % 2 == 0 {
                            Direction::Left
                        } else {
                            Direction::Right
                        };
                        let member = *member;
                        view! {
                            <InFromXAxis direction=direction>
                                <MemberCard member=member />
                            </InFromXAxis>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="member-card">
            <img src=member.avatar alt=member.name class="member-photo" />
            <div class="member-name">{member.name}</div>
            <div class="member-role">{member.role}</div>
        </div>
    }
}
