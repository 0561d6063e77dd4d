pub mod health;
pub mod notify;

pub use health::health_check;
pub use notify::{preflight, send_notification};
