//! Re-exports the shared building blocks consumed by the routine services:
//! configuration handling, the canonical routine DTOs, the error taxonomy,
//! and the DeepSeek chat client.

pub mod config;
pub mod deepseek_client;
pub mod dto;
pub mod error;
