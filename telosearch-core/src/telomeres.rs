//! Generation of telomere fragments from a repeat unit.
//!
//! A telomere fragment of length `L` is any window of `L` bases cut out of the
//! motif repeated end to end. There are exactly as many distinct start
//! positions as the motif is long, one per rotation offset.

use crate::alphabet::{reverse_complement, validate_sequence};
use crate::consts::MAX_FRAGMENT_LENGTH;
use crate::errors::{Result, TelomereError};

/// Number of motif copies needed so that a window of `length` bases fits
/// behind every rotation offset.
///
/// A window starting at offset `m - 1` ends at `length + m - 1`, so the
/// repeated string must satisfy `cycles * m >= length + m - 1`. Two spare
/// copies on top of `ceil(length / m)` always cover it.
///
/// Returns `None` for an empty motif or when the repeated string would not
/// fit in a `usize`.
pub fn cycles_for(motif_len: usize, length: usize) -> Option<usize> {
    if motif_len == 0 {
        return None;
    }
    let cycles = length.div_ceil(motif_len).checked_add(2)?;
    let total = cycles.checked_mul(motif_len)?;
    debug_assert!(total >= length + motif_len - 1);
    Some(cycles)
}

fn check_motif(motif: &str) -> Result<()> {
    if motif.is_empty() {
        return Err(TelomereError::EmptyMotif);
    }
    validate_sequence(motif)
}

fn check_length(length: usize) -> Result<()> {
    if length > MAX_FRAGMENT_LENGTH {
        return Err(TelomereError::FragmentTooLong {
            length,
            max: MAX_FRAGMENT_LENGTH,
        });
    }
    Ok(())
}

/// Expects an already validated, non-empty motif.
fn rotations(motif: &str, length: usize) -> Result<Vec<String>> {
    // byte offsets below are only char boundaries for ASCII input
    debug_assert!(motif.is_ascii());

    let m = motif.len();
    let cycles = cycles_for(m, length).ok_or(TelomereError::FragmentTooLong {
        length,
        max: MAX_FRAGMENT_LENGTH,
    })?;
    let base_string = motif.repeat(cycles);

    Ok((0..m)
        .map(|offset| base_string[offset..offset + length].to_string())
        .collect())
}

/// Generate the forward telomere fragments of a repeat.
///
/// # Arguments
///
/// * `motif` - the repeat unit whose shifted repeats form a telomere
/// * `length` - the length of every generated fragment, at most
///   [`MAX_FRAGMENT_LENGTH`]
///
/// # Returns
///
/// One fragment per rotation offset, in offset order.
pub fn gen_telomeres_forward(motif: &str, length: usize) -> Result<Vec<String>> {
    check_motif(motif)?;
    check_length(length)?;
    rotations(motif, length)
}

/// Generate telomere fragments of a repeat, optionally adding the fragments of
/// its reverse complement after the forward ones.
///
/// # Arguments
///
/// * `motif` - the repeat unit whose shifted repeats form a telomere
/// * `length` - the length of every generated fragment, at most
///   [`MAX_FRAGMENT_LENGTH`]
/// * `include_reverse` - also generate from the reverse complement of `motif`
pub fn gen_telomeres(motif: &str, length: usize, include_reverse: bool) -> Result<Vec<String>> {
    check_motif(motif)?;
    check_length(length)?;

    let mut telomeres = rotations(motif, length)?;
    if include_reverse {
        let reverse = reverse_complement(motif)?;
        telomeres.extend(rotations(&reverse, length)?);
    }

    Ok(telomeres)
}
