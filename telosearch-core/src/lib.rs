//! # Telomere fragment search
//!
//! Determines whether short DNA sequences are telomere fragments of a repeat
//! unit: cyclic rotations of the repeated motif, or of its reverse complement.
//!
//! For every length in the inspection window (20 to 25 bases by default) the
//! crate generates all rotations of the repeat, fingerprints them with SHA-256
//! and classifies query sequences against those fingerprints in parallel.
//!
//! ## Quick Start
//!
//! ```rust
//! use telosearch_core::search_telomeres;
//!
//! let candidates = vec![
//!     "CCCTAAACCCTAAACCCTAT",    // mismatched tail
//!     "CCCTAAACCCTAAACCCTAA",    // 20-nt rotation
//!     "CCCTAAACCCTAAACCC",       // too short
//!     "CCCTAAACCCTAAACCCTAAAC",  // 22-nt rotation
//! ];
//!
//! let results = search_telomeres(&candidates, "CCCTAAA", true).unwrap();
//! assert_eq!(results, vec![false, true, false, true]);
//! ```
//!
//! ## Module Structure
//!
//! - `alphabet` - complement table and reverse complement
//! - `telomeres` - rotation generation from a repeat
//! - `digest` - SHA-256 fingerprints
//! - `index` - per-length fingerprint index
//! - `search` - single and batch classification
//! - `config` - search settings loadable from TOML

pub mod alphabet;
pub mod config;
pub mod consts;
pub mod digest;
pub mod errors;
pub mod index;
pub mod search;
pub mod telomeres;

// re-exports
pub use alphabet::{complement_base, reverse_complement, validate_sequence};
pub use config::SearchConfig;
pub use digest::{Fingerprint, sha256};
pub use errors::{Result, TelomereError};
pub use index::{TelomereHashIndex, validate_window};
pub use search::{TelomereSearcher, search_string_hash, search_telomeres, search_telomeres_default};
pub use telomeres::{cycles_for, gen_telomeres, gen_telomeres_forward};
