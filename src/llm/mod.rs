pub mod client;

pub use client::{GenerationError, LLMClient};
