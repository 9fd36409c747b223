use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelomereError {
    #[error("Invalid nucleotide '{symbol}' at position {position}, expected one of A, C, G, T")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Repeat motif must not be empty")]
    EmptyMotif,

    #[error("Invalid telomere length range: {min}..={max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("Fragment length {length} exceeds the maximum of {max}")]
    FragmentTooLong { length: usize, max: usize },

    #[error("Can't build worker pool: {0}")]
    ThreadPool(String),

    #[error("Can't parse search config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TelomereError>;
