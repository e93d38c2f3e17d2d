//! Notifier implementations behind the `AlertNotifier` port.
//!
//! The evaluator fires one alert per evaluated material; implementations here
//! decide what "delivering" means. Delivery is best-effort and fire-and-forget;
//! dedup and persistence belong to whatever consumes the notifications.

pub mod in_memory;
pub mod log;

pub use in_memory::{AlertNotification, InMemoryNotifier, Subscription};
pub use log::TracingNotifier;
