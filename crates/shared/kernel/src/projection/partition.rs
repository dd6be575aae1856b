use serde::Serialize;
use vinewood_domain::site::Severity;
use vinewood_domain::team::Role;

/// A closed discriminator with a fixed priority order.
///
/// The last entry of [`Band::ORDER`] is the default bucket: a key that is somehow
/// missing from `ORDER` lands there instead of being dropped.
pub trait Band: Copy + Eq + 'static {
    const ORDER: &'static [Self];
}

impl Band for Severity {
    const ORDER: &'static [Self] = &Self::ALL;
}

impl Band for Role {
    const ORDER: &'static [Self] = &Self::ALL;
}

/// Featured/highlighted versus regular placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prominence {
    Highlighted,
    Regular,
}

impl Prominence {
    pub const fn from_flag(flag: bool) -> Self {
        if flag { Self::Highlighted } else { Self::Regular }
    }
}

impl Band for Prominence {
    const ORDER: &'static [Self] = &[Self::Highlighted, Self::Regular];
}

/// Items split into one bucket per band, in priority order.
#[derive(Debug, Clone)]
pub struct Partition<'a, K, T> {
    buckets: Vec<(K, Vec<&'a T>)>,
}

impl<'a, K: Band, T> Partition<'a, K, T> {
    /// Items of one band, in input order.
    pub fn bucket(&self, band: K) -> &[&'a T] {
        self.buckets.iter().find(|(k, _)| *k == band).map_or(&[], |(_, items)| items.as_slice())
    }

    /// Every band in priority order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (K, &[&'a T])> {
        self.buckets.iter().map(|(k, items)| (*k, items.as_slice()))
    }

    /// Total number of items across all bands.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }

    /// Concatenation of all bands: a stable sort by band priority.
    pub fn flatten(&self) -> Vec<&'a T> {
        self.buckets.iter().flat_map(|(_, items)| items.iter().copied()).collect()
    }
}

/// Partitions `items` by `key` into the fixed band order of `K`.
///
/// Exhaustive and disjoint: every item lands in exactly one bucket, and relative
/// order inside a bucket is preserved.
pub fn partition_by<'a, K, T, I, F>(items: I, key: F) -> Partition<'a, K, T>
where
    K: Band,
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    let mut buckets: Vec<(K, Vec<&'a T>)> = K::ORDER.iter().map(|k| (*k, Vec::new())).collect();
    let last = buckets.len().saturating_sub(1);

    for item in items {
        let band = key(item);
        let slot = buckets.iter().position(|(k, _)| *k == band).unwrap_or(last);
        if let Some((_, bucket)) = buckets.get_mut(slot) {
            bucket.push(item);
        }
    }

    Partition { buckets }
}
