//! HTTP client layer: `PresyoHttp`, one GET per endpoint.

pub mod client;

pub use client::PresyoHttp;
