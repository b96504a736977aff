//! Haikugen - AI haiku generation backed by Amazon Bedrock.
//!
//! This crate is a small demo application: a topic string travels through a
//! typed client facade to a hosted model inference endpoint and comes back
//! as a haiku. The model wire schema is isolated behind one outbound
//! adapter, so swapping the backing model touches a single module.
//!
//! # Architecture
//!
//! The crate uses a hexagonal (port/adapter) layout:
//!
//! - **`port::outbound`** - The [`HaikuBackend`](port::outbound::backend::HaikuBackend)
//!   contract: one prompt in, one remote outcome back.
//! - **`adapter::outbound::bedrock`** - Bedrock runtime client plus the pure
//!   request-building/response-parsing pair for the Anthropic invoke schema.
//! - **`app`** - The [`HaikuService`](app::HaikuService) client facade:
//!   one best-effort attempt per call, no retries, no cancellation.
//! - **`adapter::inbound::cli`** - The terminal submitter: interactive
//!   session, one-shot generation, diagnostics, and configuration tooling.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions (hexagonal ports)
//! - [`adapter`] - Port implementations (inbound CLI, outbound Bedrock)
//! - [`app`] - Application layer (client facade)
//!
//! # Example
//!
//! ```no_run
//! use haikugen::app::HaikuService;
//! use haikugen::config::Config;
//!
//! # async fn demo() -> haikugen::error::Result<()> {
//! let config = Config::default();
//! let service = HaikuService::from_config(&config);
//! if let Some(haiku) = service.generate("cherry blossoms in spring").await? {
//!     println!("{haiku}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
