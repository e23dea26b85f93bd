//! Logging and instrumentation.
//!
//! Library code only emits `tracing` events. Installing a subscriber is left
//! to the binary, through [`subscriber::init_subscriber`].

pub mod subscriber;
pub mod tracing;

pub use subscriber::{OutputFormat, SubscriberConfig, init_subscriber};
pub use self::tracing::{ProviderTracer, mask_sensitive_value, mask_url_secrets};
