//! Key-value store backends.
//!
//! - [`RedisStore`] - Production backend, state shared between processes
//! - [`MemoryStore`] - In-process backend for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
