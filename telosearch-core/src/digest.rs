use std::fmt::{Display, Formatter};

use sha2::{Digest, Sha256};

/// SHA-256 digest of a telomere fragment, used in place of the fragment itself
/// for membership tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Compute the SHA-256 fingerprint of a sequence.
///
/// Index construction and queries both hash the UTF-8 bytes of the sequence,
/// so a fragment and an identical candidate always collide.
///
/// # Arguments
///
/// * `input` - the sequence, as a string slice or byte slice.
pub fn sha256<T: AsRef<[u8]>>(input: T) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(input.as_ref());
    Fingerprint(hasher.finalize().into())
}
