/// Nova APNs Push Library
///
/// This library delivers push notifications to Apple devices over the
/// token-based (JWT) APNs provider API, replacing the older
/// certificate-based channel.
///
/// It handles:
/// - ES256 provider token signing from an Apple `.p8` auth key
/// - Provider token caching with automatic refresh
/// - Payload encoding (`aps` dictionary plus custom top-level fields)
/// - Delivery-control headers (priority, expiration, collapsing, push type)
/// - Sandbox and production gateway routing

pub mod client;
pub mod config;
pub mod errors;
pub mod headers;
pub mod payload;
pub mod token;
pub mod transport;

pub use client::{ApnsClient, ApnsResponse};
pub use config::{ApnsNotification, Environment, PushType};
pub use errors::{ApnsError, Result};
pub use token::TokenSigner;
pub use transport::{ApnsTransport, HttpTransport};
