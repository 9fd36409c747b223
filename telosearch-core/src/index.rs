use std::ops::RangeInclusive;

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use crate::consts::{MAX_FRAGMENT_LENGTH, MAX_TELOMERE_LENGTH, MIN_TELOMERE_LENGTH};
use crate::digest::{Fingerprint, sha256};
use crate::errors::{Result, TelomereError};
use crate::telomeres::gen_telomeres;

/// Check an inclusive window of fragment lengths: non-empty, starting at 1 or
/// more and ending at [`MAX_FRAGMENT_LENGTH`] at most.
pub fn validate_window(min_length: usize, max_length: usize) -> Result<()> {
    if min_length == 0 || min_length > max_length || max_length > MAX_FRAGMENT_LENGTH {
        return Err(TelomereError::InvalidLengthRange {
            min: min_length,
            max: max_length,
        });
    }
    Ok(())
}

/// Fingerprints of every telomere fragment of a repeat, keyed by fragment
/// length.
///
/// The index holds one entry per length of its inspection window and nothing
/// else. It is read-only once built, so a single instance can be shared across
/// worker threads by reference.
#[derive(Debug, Clone)]
pub struct TelomereHashIndex {
    motif: String,
    include_reverse: bool,
    lengths: RangeInclusive<usize>,
    hashes: FxHashMap<usize, FxHashSet<Fingerprint>>,
}

impl TelomereHashIndex {
    /// Build the index over the default window of 20 to 25 bases.
    ///
    /// # Arguments
    ///
    /// * `motif` - the repeat unit
    /// * `include_reverse` - also index the reverse complement fragments
    pub fn build(motif: &str, include_reverse: bool) -> Result<Self> {
        Self::build_with_lengths(
            motif,
            include_reverse,
            MIN_TELOMERE_LENGTH,
            MAX_TELOMERE_LENGTH,
        )
    }

    /// Build the index over an arbitrary inclusive window of fragment lengths.
    pub fn build_with_lengths(
        motif: &str,
        include_reverse: bool,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self> {
        validate_window(min_length, max_length)?;

        let lengths = min_length..=max_length;
        let mut hashes = FxHashMap::default();
        for length in lengths.clone() {
            let telomeres = gen_telomeres(motif, length, include_reverse)?;
            let fingerprints: FxHashSet<Fingerprint> = telomeres.iter().map(sha256).collect();
            hashes.insert(length, fingerprints);
        }

        let index = TelomereHashIndex {
            motif: motif.to_string(),
            include_reverse,
            lengths,
            hashes,
        };
        debug!(
            "Built telomere index for {} (reverse: {}): {} fingerprints over lengths {}..={}",
            index.motif,
            index.include_reverse,
            index.fingerprint_count(),
            min_length,
            max_length
        );

        Ok(index)
    }

    pub fn motif(&self) -> &str {
        &self.motif
    }

    pub fn include_reverse(&self) -> bool {
        self.include_reverse
    }

    /// The inclusive window of fragment lengths covered by this index.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.lengths.clone()
    }

    /// Whether a sequence of `length` bases can match at all.
    pub fn covers(&self, length: usize) -> bool {
        self.lengths.contains(&length)
    }

    /// Fingerprints for one length, `None` outside the window.
    pub fn get(&self, length: usize) -> Option<&FxHashSet<Fingerprint>> {
        self.hashes.get(&length)
    }

    pub fn contains(&self, length: usize, fingerprint: &Fingerprint) -> bool {
        self.hashes
            .get(&length)
            .is_some_and(|fingerprints| fingerprints.contains(fingerprint))
    }

    /// Number of distinct fingerprints across all lengths.
    pub fn fingerprint_count(&self) -> usize {
        self.hashes.values().map(|fingerprints| fingerprints.len()).sum()
    }

    /// Number of lengths in the index.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
