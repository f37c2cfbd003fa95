//! # Webflow API Rust SDK
//!
//! A typed async client for the Webflow REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A [`Webflow`] entry point wiring options and a transport into every resource
//! - Resource accessors for token metadata, custom domains and sites
//! - A single [`Transport`](clients::Transport) call path with one error type,
//!   [`WebflowError`]
//! - Pluggable transports for tests or custom networking
//!   ([`MockTransport`](clients::MockTransport), [`HttpTransport`](clients::HttpTransport))
//! - Plain data models mirroring the API's JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use webflow_api::Webflow;
//!
//! let webflow = Webflow::new("your-api-token");
//!
//! let info = webflow.meta().get_info().await?;
//! println!("rate limit: {}/min", info.rate_limit);
//!
//! for domain in webflow.domains().get_list("5ee5e7459c39a7e47341f82f").await? {
//!     println!("{}", domain.name);
//! }
//! ```
//!
//! ## Cancellation and Deadlines
//!
//! Every operation has a `_with_context` form taking a
//! [`RequestContext`](clients::RequestContext):
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use webflow_api::clients::RequestContext;
//!
//! let ctx = RequestContext::background().with_timeout(Duration::from_secs(10));
//! let user = webflow.meta().get_user_with_context(&ctx).await?;
//! ```
//!
//! ## Error Handling
//!
//! Operations return `Result<T, WebflowError>`. Upstream errors carry the
//! HTTP status in `code`; local failures (bad input, network, decoding) use
//! the reserved code 418 and [`ErrorOrigin::Local`].
//!
//! ```rust,ignore
//! match webflow.sites().get("580e63e98c9a982ac9b8b741").await {
//!     Ok(site) => println!("{}", site.name),
//!     Err(e) if e.is_local() => eprintln!("request failed: {}", e.message),
//!     Err(e) => eprintln!("API returned {}: {}", e.code, e.err),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based
//! - **No hidden policy**: no retries, caching or rate limiting
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
mod webflow;

pub use clients::{ErrorOrigin, WebflowError};
pub use config::{ApiKey, BaseUrl, WebflowConfig, WebflowConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use webflow::Webflow;
