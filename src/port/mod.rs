//! Trait definitions (hexagonal ports).
//!
//! Ports are the contracts adapters implement to integrate with external
//! systems. The application layer depends only on these traits, so swapping
//! the backing model provider touches a single outbound adapter.

pub mod outbound;
