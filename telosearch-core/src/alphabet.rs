//! Nucleotide alphabet and the reverse-complement transform.
//!
//! Only the four canonical DNA bases are recognised. Anything else, including
//! lowercase bases and IUPAC ambiguity codes, is reported as
//! [`TelomereError::InvalidSymbol`] instead of being passed through.

use crate::errors::{Result, TelomereError};

/// Marks bytes that have no complement.
const NO_COMPLEMENT: u8 = 0;

/// Lookup table mapping an ASCII base to its Watson-Crick complement.
/// Every entry other than A, C, G, T holds [`NO_COMPLEMENT`].
const DNA_COMPLEMENT_ARRAY: [u8; 256] = {
    let mut arr = [NO_COMPLEMENT; 256];
    arr[b'A' as usize] = b'T';
    arr[b'T' as usize] = b'A';
    arr[b'C' as usize] = b'G';
    arr[b'G' as usize] = b'C';
    arr
};

/// Returns the complement of a single base, or `None` if the byte is not
/// one of A, C, G, T.
#[inline]
pub fn complement_base(base: u8) -> Option<u8> {
    match DNA_COMPLEMENT_ARRAY[base as usize] {
        NO_COMPLEMENT => None,
        complement => Some(complement),
    }
}

/// Checks that every symbol of `sequence` is a canonical base.
///
/// # Returns
///
/// The first offending symbol and its (character) position as
/// [`TelomereError::InvalidSymbol`].
pub fn validate_sequence(sequence: &str) -> Result<()> {
    match sequence
        .chars()
        .enumerate()
        .find(|(_, symbol)| !symbol.is_ascii() || complement_base(*symbol as u8).is_none())
    {
        Some((position, symbol)) => Err(TelomereError::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}

/// Computes the reverse complement of a nucleotide sequence.
///
/// Each base is complemented (A<->T, C<->G) and the result is read backwards,
/// so `reverse_complement("CCCTAAA") == "TTTAGGG"`.
///
/// # Arguments
///
/// * `sequence` - sequence over {A, C, G, T}
pub fn reverse_complement(sequence: &str) -> Result<String> {
    let mut complemented: Vec<u8> = Vec::with_capacity(sequence.len());
    for (position, symbol) in sequence.chars().enumerate() {
        let base = if symbol.is_ascii() {
            complement_base(symbol as u8)
        } else {
            None
        };
        match base {
            Some(base) => complemented.push(base),
            None => return Err(TelomereError::InvalidSymbol { symbol, position }),
        }
    }

    Ok(complemented.into_iter().rev().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(b'A', b'T')]
    #[case(b'T', b'A')]
    #[case(b'C', b'G')]
    #[case(b'G', b'C')]
    fn test_complement_base(#[case] base: u8, #[case] expected: u8) {
        assert_eq!(complement_base(base), Some(expected));
    }

    #[rstest]
    #[case(b'N')]
    #[case(b'a')]
    #[case(b'U')]
    #[case(b'\0')]
    fn test_complement_base_rejects_non_canonical(#[case] base: u8) {
        assert_eq!(complement_base(base), None);
    }

    #[rstest]
    #[case("CCCTAAA", "TTTAGGG")]
    #[case("TTAGGG", "CCCTAA")]
    #[case("ACGT", "ACGT")]
    #[case("A", "T")]
    #[case("", "")]
    fn test_reverse_complement(#[case] sequence: &str, #[case] expected: &str) {
        assert_eq!(reverse_complement(sequence).unwrap(), expected);
    }

    #[rstest]
    fn test_reverse_complement_is_involution() {
        let sequence = "GATTACACCCTAAAGGGTTT";
        let twice = reverse_complement(&reverse_complement(sequence).unwrap()).unwrap();
        assert_eq!(twice, sequence);
    }

    #[rstest]
    #[case("CCCNAAA", 'N', 3)]
    #[case("ccctaaa", 'c', 0)]
    #[case("ACGTé", 'é', 4)]
    fn test_reverse_complement_invalid_symbol(
        #[case] sequence: &str,
        #[case] symbol: char,
        #[case] position: usize,
    ) {
        match reverse_complement(sequence) {
            Err(TelomereError::InvalidSymbol {
                symbol: found,
                position: at,
            }) => {
                assert_eq!(found, symbol);
                assert_eq!(at, position);
            }
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
    }

    #[rstest]
    fn test_validate_sequence() {
        assert!(validate_sequence("CCCTAAACCCTAAACCCTAA").is_ok());
        assert!(validate_sequence("").is_ok());
        assert!(matches!(
            validate_sequence("CCCTAAXCC"),
            Err(TelomereError::InvalidSymbol {
                symbol: 'X',
                position: 6
            })
        ));
    }
}
