//! Authentication implementations.

mod demo;

pub use demo::{DEFAULT_LATENCY, DemoAuthenticator, DemoCredentials};
