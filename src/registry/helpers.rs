//! Drawing from the registry.

use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::Instrument;
use uuid::Uuid;

use super::SourceRegistry;
use crate::error::{Result, SeedError};
use crate::types::Seed;

/// Resolve `name`, fetch its seed and take one sample from a fresh generator.
///
/// Unknown names fail before any network call. Each call builds its own
/// generator, so concurrent draws share nothing.
pub async fn draw(registry: &SourceRegistry, name: &str) -> Result<f64> {
    let span = tracing::info_span!("draw", draw_id = %Uuid::new_v4(), source = %name);
    async move {
        let fetcher = registry.resolve(name)?;
        let seed = fetcher.seed().await?;
        let value = draw_from_seed(seed);
        tracing::info!(seed = seed.value(), value = value, "Draw completed");
        Ok::<f64, SeedError>(value)
    }
    .instrument(span)
    .await
}

/// One uniform `f64` in `[0, 1)` from a generator seeded with `seed`.
pub fn draw_from_seed(seed: Seed) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed.value());
    rng.sample(Standard)
}
