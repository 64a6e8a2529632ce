//! Screen controllers for the application.
//!
//! One screen per view the dispatcher can produce:
//!
//! ```text
//! View::Landing              -> LandingScreen
//! View::Signup(role)         -> SignupScreen (one per role)
//! View::Dashboard { role, .. } -> DashboardScreen (one per role)
//! ```
//!
//! Screens own only their local UI state. Everything that changes the page
//! or the session goes back to the app as a [`ScreenAction`].

pub mod dashboard;
pub mod landing;
pub mod screen_trait;
pub mod signup;

pub use dashboard::DashboardScreen;
pub use landing::LandingScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use signup::SignupScreen;
