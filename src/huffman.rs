use std::fmt::Display;

use crate::frequency::FrequencyTable;

pub mod code;
pub mod codec;
pub mod tree;

pub use code::CodeTable;
pub use codec::HuffmanCoder;
pub use tree::HuffmanTree;

/// A symbol is one character of the input text.
pub type Symbol = char;

/// Codes are written with the digit characters `'0'..='9'`, which bounds the
/// supported arity.
pub const MIN_ARITY: usize = 2;
pub const MAX_ARITY: usize = 10;

#[derive(Debug)]
pub enum CodingError {
    InvalidArity(usize),
    EmptySymbolSet,
    UnknownSymbol(Symbol),
    InvalidEncoding(usize),
    TruncatedEncoding,
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArity(arity) => {
                write!(
                    f,
                    "Arity {} is not supported, must be between {} and {}",
                    arity, MIN_ARITY, MAX_ARITY
                )
            }
            Self::EmptySymbolSet => {
                write!(f, "Cannot build a code tree over an empty symbol set")
            }
            Self::UnknownSymbol(symbol) => {
                write!(
                    f,
                    "Symbol {:?} is not part of the alphabet the tree was built from",
                    symbol
                )
            }
            Self::InvalidEncoding(position) => {
                write!(f, "Encoded sequence does not fit the tree at digit {}", position)
            }
            Self::TruncatedEncoding => {
                write!(f, "Encoded sequence ends in the middle of a code word")
            }
        }
    }
}

impl std::error::Error for CodingError {}

/// Counts the text's symbol frequencies and derives the code tree and code
/// table in one step.
pub fn build(text: &str, arity: usize) -> Result<(HuffmanTree, CodeTable), CodingError> {
    let frequency_table = FrequencyTable::from_text(text);
    let tree = HuffmanTree::new(&frequency_table.to_sorted_pairs(), arity)?;
    let table = CodeTable::new(&tree);
    Ok((tree, table))
}

#[cfg(test)]
mod test {
    use super::{build, CodingError, HuffmanCoder};

    #[test]
    fn test_build_rejects_invalid_arity() {
        for arity in [0, 1, 11] {
            let result = build("some text", arity);
            assert!(matches!(result, Err(CodingError::InvalidArity(a)) if a == arity));
        }
    }

    #[test]
    fn test_build_rejects_empty_text() {
        let result = build("", 2);
        assert!(matches!(result, Err(CodingError::EmptySymbolSet)));
    }

    #[test]
    fn test_built_table_round_trips_through_the_built_tree() {
        let text = "mississippi";
        let (tree, table) = build(text, 2).unwrap();
        let coder = HuffmanCoder::from_parts(&tree, table);
        let encoded = coder.encode_sequence(text).unwrap();
        assert_eq!(coder.decode_sequence(&encoded).unwrap(), text);
    }
}
