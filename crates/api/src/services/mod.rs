//! Application services.

pub mod auth;
pub mod email;
pub mod notifier;

pub use auth::HotelAuthService;
pub use email::{EmailError, EmailService};
pub use notifier::{NoticeTransport, Notifier};
