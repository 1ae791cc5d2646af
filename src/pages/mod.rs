// Page routes.

mod about;
mod home;

pub use about::AboutPage;
pub use home::HomePage;
