//! Classification of candidate sequences against a telomere index.
//!
//! [`search_string_hash`] answers one candidate. [`TelomereSearcher`] builds
//! the index once per motif and fans a whole batch out over its own rayon pool.

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::alphabet::validate_sequence;
use crate::config::SearchConfig;
use crate::consts::DEFAULT_INCLUDE_REVERSE;
use crate::digest::sha256;
use crate::errors::{Result, TelomereError};
use crate::index::TelomereHashIndex;

/// Determine whether a single sequence is a telomere fragment of the indexed
/// repeat.
///
/// Candidates whose length falls outside the index window are never
/// telomeres and return `Ok(false)` whatever they contain. Inside the window
/// a symbol other than A, C, G, T is an error.
pub fn search_string_hash(candidate: &str, index: &TelomereHashIndex) -> Result<bool> {
    let length = candidate.chars().count();
    if !index.covers(length) {
        return Ok(false);
    }

    validate_sequence(candidate)?;

    Ok(index.contains(length, &sha256(candidate)))
}

/// Batch classifier owning the worker pool it runs on.
///
/// The pool lives exactly as long as the searcher; dropping it joins and
/// releases the workers, whether the last batch succeeded or not.
pub struct TelomereSearcher {
    pool: ThreadPool,
    config: SearchConfig,
}

impl TelomereSearcher {
    /// Create a searcher with `threads` workers and the default length window.
    /// `0` sizes the pool to the available parallelism.
    pub fn new(threads: usize) -> Result<Self> {
        Self::from_config(&SearchConfig {
            threads,
            ..SearchConfig::default()
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("telosearch-{}", i))
            .build()
            .map_err(|e| TelomereError::ThreadPool(e.to_string()))?;
        debug!("Started search pool with {} threads", pool.current_num_threads());

        Ok(TelomereSearcher {
            pool,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Build the index for this searcher's length window.
    pub fn build_index(&self, motif: &str, include_reverse: bool) -> Result<TelomereHashIndex> {
        TelomereHashIndex::build_with_lengths(
            motif,
            include_reverse,
            self.config.min_length,
            self.config.max_length,
        )
    }

    /// Determine which of `candidates` are telomeres of `motif`.
    ///
    /// # Arguments
    ///
    /// * `candidates` - sequences to classify
    /// * `motif` - the repeat unit
    /// * `include_reverse` - also accept rotations of the reverse complement
    ///
    /// # Returns
    ///
    /// One boolean per candidate, in input order. The first invalid symbol in
    /// the motif or in an in-window candidate aborts the whole batch.
    pub fn search_telomeres<S>(
        &self,
        candidates: &[S],
        motif: &str,
        include_reverse: bool,
    ) -> Result<Vec<bool>>
    where
        S: AsRef<str> + Sync,
    {
        let index = self.build_index(motif, include_reverse)?;
        self.search_with_index(candidates, &index)
    }

    /// Same as [`TelomereSearcher::search_telomeres`] with the orientation
    /// taken from the searcher's config.
    pub fn search<S>(&self, candidates: &[S], motif: &str) -> Result<Vec<bool>>
    where
        S: AsRef<str> + Sync,
    {
        self.search_telomeres(candidates, motif, self.config.include_reverse)
    }

    /// Classify a batch against an index that was built beforehand.
    pub fn search_with_index<S>(
        &self,
        candidates: &[S],
        index: &TelomereHashIndex,
    ) -> Result<Vec<bool>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<bool> = self.pool.install(|| {
            candidates
                .par_iter()
                .map(|candidate| search_string_hash(candidate.as_ref(), index))
                .collect::<Result<Vec<bool>>>()
        })?;

        info!(
            "{} of {} sequences are telomeres of {}",
            results.iter().filter(|&&hit| hit).count(),
            results.len(),
            index.motif()
        );

        Ok(results)
    }
}

/// Determine whether a list of sequences are telomeres of the given repeat.
///
/// Starts a pool sized to the machine, runs the batch and shuts the pool
/// down before returning.
pub fn search_telomeres<S>(candidates: &[S], motif: &str, include_reverse: bool) -> Result<Vec<bool>>
where
    S: AsRef<str> + Sync,
{
    let searcher = TelomereSearcher::new(0)?;
    searcher.search_telomeres(candidates, motif, include_reverse)
}

/// [`search_telomeres`] with reverse complements included.
pub fn search_telomeres_default<S>(candidates: &[S], motif: &str) -> Result<Vec<bool>>
where
    S: AsRef<str> + Sync,
{
    search_telomeres(candidates, motif, DEFAULT_INCLUDE_REVERSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn human_index() -> TelomereHashIndex {
        TelomereHashIndex::build("CCCTAAA", true).unwrap()
    }

    #[fixture]
    fn searcher() -> TelomereSearcher {
        TelomereSearcher::new(2).unwrap()
    }

    #[rstest]
    #[case("CCCTAAACCCTAAACCCTAT", false)]
    #[case("CCCTAAACCCTAAACCCTAA", true)]
    #[case("CCCTAAACCCTAAACCC", false)]
    #[case("CCCTAAACCCTAAACCCTAAAC", true)]
    #[case("CTAAACCCTAAACCCTAAACCCT", true)]
    #[case("TTTAGGGTTTAGGGTTTAGGGTT", true)]
    fn test_search_string_hash(
        human_index: TelomereHashIndex,
        #[case] candidate: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(search_string_hash(candidate, &human_index).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("NNNNNNNNNN")]
    #[case("CCCTAAACCCTAAACCCTAAACCCTA")]
    #[case("not even dna, but far too long to be a telomere")]
    fn test_out_of_window_is_never_a_match(human_index: TelomereHashIndex, #[case] candidate: &str) {
        assert_eq!(search_string_hash(candidate, &human_index).unwrap(), false);
    }

    #[rstest]
    fn test_in_window_invalid_symbol_is_error(human_index: TelomereHashIndex) {
        assert!(matches!(
            search_string_hash("CCCTAAACCCTAAACCCTNA", &human_index),
            Err(TelomereError::InvalidSymbol {
                symbol: 'N',
                position: 18
            })
        ));
    }

    #[rstest]
    fn test_searcher_preserves_order(searcher: TelomereSearcher) {
        let candidates = vec![
            "CCCTAAACCCTAAACCCTAA",
            "CCCTAAACCCTAAACCCTAT",
            "CCCTAAACCCTAAACCCTAA",
            "CCCTAAACCC",
            "CCCTAAACCCTAAACCCTAT",
            "AAACCCTAAACCCTAAACCCT",
        ];
        let results = searcher
            .search_telomeres(&candidates, "CCCTAAA", true)
            .unwrap();
        assert_eq!(results, vec![true, false, true, false, false, true]);
    }

    #[rstest]
    fn test_searcher_forward_only(searcher: TelomereSearcher) {
        let candidates = ["TTTAGGGTTTAGGGTTTAGGG", "CCCTAAACCCTAAACCCTAAA"];
        let results = searcher
            .search_telomeres(&candidates, "CCCTAAA", false)
            .unwrap();
        assert_eq!(results, vec![false, true]);
    }

    #[rstest]
    fn test_searcher_aborts_on_invalid_candidate(searcher: TelomereSearcher) {
        let candidates = ["CCCTAAACCCTAAACCCTAA", "CCCTAAACCCTAAACCCTAX"];
        assert!(matches!(
            searcher.search_telomeres(&candidates, "CCCTAAA", true),
            Err(TelomereError::InvalidSymbol { symbol: 'X', .. })
        ));
    }

    #[rstest]
    fn test_searcher_aborts_on_invalid_motif(searcher: TelomereSearcher) {
        let candidates = ["CCCTAAACCCTAAACCCTAA"];
        assert!(matches!(
            searcher.search_telomeres(&candidates, "CCCTRAA", true),
            Err(TelomereError::InvalidSymbol { symbol: 'R', .. })
        ));
    }

    #[rstest]
    fn test_searcher_empty_batch(searcher: TelomereSearcher) {
        let candidates: Vec<String> = Vec::new();
        assert!(searcher
            .search_telomeres(&candidates, "CCCTAAA", true)
            .unwrap()
            .is_empty());
    }

    #[rstest]
    fn test_searcher_custom_window() {
        let config = SearchConfig {
            min_length: 6,
            max_length: 12,
            include_reverse: true,
            threads: 1,
        };
        let searcher = TelomereSearcher::from_config(&config).unwrap();
        assert_eq!(searcher.num_threads(), 1);

        let candidates = ["TTAGGG", "CCCTAACCCTAA", "TTAGGGTTAGGGT", "GGGTTA"];
        let results = searcher.search(&candidates, "TTAGGG").unwrap();
        assert_eq!(results, vec![true, true, false, true]);
    }

    #[rstest]
    fn test_searcher_rejects_bad_config() {
        let config = SearchConfig {
            min_length: 0,
            ..SearchConfig::default()
        };
        assert!(matches!(
            TelomereSearcher::from_config(&config),
            Err(TelomereError::InvalidLengthRange { .. })
        ));
    }

    #[rstest]
    fn test_search_with_prebuilt_index(searcher: TelomereSearcher, human_index: TelomereHashIndex) {
        let candidates = vec![String::from("CCCTAAACCCTAAACCCTAA"); 3];
        let results = searcher.search_with_index(&candidates, &human_index).unwrap();
        assert_eq!(results, vec![true; 3]);
    }

    #[rstest]
    fn test_search_telomeres_free_fn() {
        let candidates = ["CCCTAAACCCTAAACCCTAA", "CCCTAAACCC"];
        assert_eq!(
            search_telomeres_default(&candidates, "CCCTAAA").unwrap(),
            vec![true, false]
        );
    }
}
