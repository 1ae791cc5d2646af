// Page sections for the Review App marketing site.

mod add_widget;
mod background;
mod common;
mod community;
mod features;
mod footer;
mod header;
mod hero;
mod mission;
mod team;
mod working;

pub use add_widget::AddWidgetSection;
pub use background::Background;
pub use community::OpenSourceCommunity;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use mission::{AboutHero, Mission};
pub use team::MeetTheTeam;
pub use working::WorkingSection;
