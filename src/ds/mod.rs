pub mod non_propagating_cache;

pub use non_propagating_cache::NonPropagatingCache;
