pub mod tier_resolver;

pub use tier_resolver::TierResolver;
