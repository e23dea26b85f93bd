//! Seed capability traits
//!
//! [`SeedFetcher`] is what each provider implements: fetch a typed payload,
//! encode it, and the default `get_seed` chains the two. [`SeedCapability`]
//! is its object-safe face, which the registry stores behind `Arc<dyn _>`.

use std::fmt;

use async_trait::async_trait;

use crate::encoding::SEED_MODULUS;
use crate::error::Result;
use crate::observability::ProviderTracer;
use crate::types::Seed;

#[async_trait]
pub trait SeedFetcher: Send + Sync {
    /// Parsed provider payload.
    type Response: Send + Sync;

    /// Stable provider identifier (`"weather"`, `"time"`, `"news"`).
    fn provider_id(&self) -> &'static str;

    /// Exclusive upper bound of the seeds `encode` returns.
    fn modulus(&self) -> u64 {
        SEED_MODULUS
    }

    /// One GET against the provider, parsed into [`Self::Response`].
    async fn fetch(&self) -> Result<Self::Response>;

    /// Reduce a payload to a seed in `[0, modulus)`.
    fn encode(&self, data: &Self::Response) -> Seed;

    /// Fetch then encode. Failures propagate unchanged.
    async fn get_seed(&self) -> Result<Seed> {
        let data = self.fetch().await?;
        let seed = self.encode(&data);
        ProviderTracer::new(self.provider_id()).trace_seed(seed.value());
        Ok(seed)
    }
}

/// Object-safe view of a [`SeedFetcher`].
#[async_trait]
pub trait SeedCapability: Send + Sync + fmt::Debug {
    fn provider(&self) -> &'static str;

    async fn seed(&self) -> Result<Seed>;
}

#[async_trait]
impl<T> SeedCapability for T
where
    T: SeedFetcher + fmt::Debug,
{
    fn provider(&self) -> &'static str {
        SeedFetcher::provider_id(self)
    }

    async fn seed(&self) -> Result<Seed> {
        SeedFetcher::get_seed(self).await
    }
}
