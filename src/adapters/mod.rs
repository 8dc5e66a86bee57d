// Adapters layer: concrete observers that present pedometer events to the user.

pub mod mobile_app;

pub use mobile_app::MobileApp;
