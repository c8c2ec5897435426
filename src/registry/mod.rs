//! Registry of deployed distributors, one per fractionalized asset

pub mod distributor_registry;

pub use distributor_registry::DistributorRegistry;
