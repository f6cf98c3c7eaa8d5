//! Hash dispatch: canonical encoding composed with an injected backend.

use crate::backend::HashBackend;
use crate::encoding::encode;
use crate::error::Result;
use crate::value::ScalarValue;

/// Hashes one scalar under `seed` using `backend`.
///
/// Pure composition: encode, delegate, return the digest unchanged. A
/// backend failure propagates untouched; there is no retry, no caching,
/// and no fallback digest.
pub fn hash_value<B>(value: &ScalarValue<'_>, seed: u64, backend: &B) -> Result<u64>
where
    B: HashBackend + ?Sized,
{
    let bytes = encode(value);
    backend.hash64(bytes.as_ref(), seed)
}

/// A backend bound to a fixed seed, held by a sketch for its lifetime.
///
/// Two sketch structures agree on coordinates exactly when their hashers
/// share both backend and seed.
#[derive(Clone, Copy, Debug)]
pub struct SketchHasher<B> {
    backend: B,
    seed: u64,
}

impl<B: HashBackend> SketchHasher<B> {
    /// Binds `backend` and `seed`.
    pub fn new(backend: B, seed: u64) -> Self {
        Self { backend, seed }
    }

    /// The bound seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Hashes one scalar under the bound seed.
    pub fn hash(&self, value: &ScalarValue<'_>) -> Result<u64> {
        hash_value(value, self.seed, &self.backend)
    }

    /// Admits a dynamic JSON scalar and hashes it in one step.
    ///
    /// A non-scalar input surfaces as
    /// [`crate::error::HashError::UnsupportedType`]; it is never mapped to
    /// a digest.
    pub fn hash_json(&self, value: &serde_json::Value) -> Result<u64> {
        let scalar = ScalarValue::try_from(value)?;
        self.hash(&scalar)
    }
}
