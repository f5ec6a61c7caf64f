// =============================================================================
// Interactive Studios Web - Page Components
// =============================================================================

pub mod about;
pub mod contact;
pub mod docs;
pub mod get_started;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use docs::DocsPage;
pub use get_started::GetStartedPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
