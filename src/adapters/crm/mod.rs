//! CRM adapters for program interest delivery.

mod http_notifier;
mod logging_notifier;

pub use http_notifier::HttpInterestNotifier;
pub use logging_notifier::LoggingInterestNotifier;
