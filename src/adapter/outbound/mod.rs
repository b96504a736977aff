//! Outbound adapters (driven side).

pub mod bedrock;
