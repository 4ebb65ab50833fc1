//! Cached stripe tables for repeatedly used public points.

use super::{PublicKey, mul::stripe_mul, point::ProjectivePoint, table::TableEntry};
use crate::{Error, Result, U256};
use alloc::{boxed::Box, vec::Vec};

/// Number of points the cache retains.
const ENTRIES: usize = 16;

struct CacheEntry {
    x: U256,
    y: U256,
    hits: u64,
    table: Box<[TableEntry; 256]>,
}

/// Cache of stripe tables for frequently multiplied points.
///
/// Building a table normalizes 255 points and dominates a single
/// multiplication, but once built the stripe ladder runs at fixed-base
/// speed. Caching pays off when the same peer point is used repeatedly,
/// as in key agreement or signature verification against one party.
///
/// Lookups compare coordinates in variable time: cached points are public
/// by construction. The scalar passed to [`scalar_mul_cached`] is still
/// handled in constant time.
pub struct PointCache {
    entries: Vec<CacheEntry>,
}

impl PointCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of points currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn table_for(&mut self, point: &PublicKey) -> Result<&[TableEntry; 256]> {
        if let Some(i) = self
            .entries
            .iter()
            .position(|e| e.x == point.x && e.y == point.y)
        {
            self.entries[i].hits += 1;
            return Ok(&self.entries[i].table);
        }

        let table = build_stripe_table(point)?;
        if self.entries.len() == ENTRIES {
            // evict the least used entry
            let mut victim = 0;
            for (i, entry) in self.entries.iter().enumerate() {
                if entry.hits < self.entries[victim].hits {
                    victim = i;
                }
            }
            self.entries.swap_remove(victim);
        }
        self.entries.push(CacheEntry {
            x: point.x,
            y: point.y,
            hits: 1,
            table,
        });
        let last = self.entries.len() - 1;
        Ok(&self.entries[last].table)
    }
}

impl Default for PointCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Stripe table for an arbitrary point: entry `j` holds
/// `sum(2^(32·i) · P for each bit i set in j)` in affine Montgomery form.
fn build_stripe_table(point: &PublicKey) -> Result<Box<[TableEntry; 256]>> {
    let base = ProjectivePoint::from_affine_canonical(&point.x, &point.y);
    let mut stripes = [base; 8];
    for i in 1..8 {
        stripes[i] = stripes[i - 1].double_n(32);
    }

    // each entry extends the one with its lowest set bit cleared
    let mut proj: Vec<ProjectivePoint> = Vec::with_capacity(256);
    proj.push(ProjectivePoint::identity());
    for j in 1..256usize {
        let low = j.trailing_zeros() as usize;
        let prev = proj[j & (j - 1)];
        proj.push(prev.add(&stripes[low]));
    }

    let mut table = Box::new([TableEntry::INFINITY; 256]);
    for (j, p) in proj.iter().enumerate().skip(1) {
        if bool::from(p.infinity) {
            return Err(Error::InvalidPoint);
        }
        let (x, y) = p.to_affine();
        table[j] = TableEntry { x: x.0, y: y.0 };
    }
    Ok(table)
}

/// Multiply `point` by `k` through the cache, constant time in `k`.
///
/// Builds and caches the stripe table for `point` on first use.
pub fn scalar_mul_cached(
    cache: &mut PointCache,
    k: &U256,
    point: &PublicKey,
) -> Result<PublicKey> {
    let table = cache.table_for(point)?;
    let prod = stripe_mul(table, k);
    if bool::from(prod.infinity) {
        return Err(Error::PointAtInfinity);
    }
    let (x, y) = prod.to_affine();
    Ok(PublicKey {
        x: x.to_canonical(),
        y: y.to_canonical(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::p256::scalar_mul;

    fn generator_key() -> PublicKey {
        let (x, y) = ProjectivePoint::generator().to_affine();
        PublicKey {
            x: x.to_canonical(),
            y: y.to_canonical(),
        }
    }

    #[test]
    fn cached_matches_uncached() {
        let g = generator_key();
        let mut cache = PointCache::new();
        let k = U256::from_be_hex(
            "096d373742f9a039c320a4737c2b3abe14a03569d26b949692e5dfe8cb1855fe",
        );
        let expect = scalar_mul(&k, &g).unwrap();
        assert_eq!(scalar_mul_cached(&mut cache, &k, &g).unwrap(), expect);
        assert_eq!(cache.len(), 1);
        // second time hits the cache
        assert_eq!(scalar_mul_cached(&mut cache, &k, &g).unwrap(), expect);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_points_get_distinct_entries() {
        let g = generator_key();
        let g2 = scalar_mul(&U256::from_u64(2), &g).unwrap();
        let mut cache = PointCache::new();
        let k = U256::from_u64(3);
        let a = scalar_mul_cached(&mut cache, &k, &g).unwrap();
        let b = scalar_mul_cached(&mut cache, &k, &g2).unwrap();
        assert_eq!(cache.len(), 2);
        assert_ne!(a, b);
        assert_eq!(b, scalar_mul(&U256::from_u64(6), &g).unwrap());
    }

    #[test]
    fn unusable_point_is_rejected() {
        let mut cache = PointCache::new();
        let junk = PublicKey {
            x: U256::ZERO,
            y: U256::ZERO,
        };
        assert!(scalar_mul_cached(&mut cache, &U256::from_u64(3), &junk).is_err());
    }
}
