//! jeeves-stores - Memory store backends for jeeves.
//!
//! # Supported Backends
//!
//! - **Memory** (always available) - process-local, see [`jeeves_core::InMemoryStore`]
//! - **Redis** (feature: `redis`, default) - one logical database per memory region

mod factory;

#[cfg(feature = "redis")]
mod redis_store;

pub use factory::StoreFactory;

#[cfg(feature = "redis")]
pub use redis_store::RedisMemoryStore;
