use super::code::CodeTable;
use super::tree::{HuffmanTree, NodeKind};
use super::{CodingError, Symbol};

/// Encodes and decodes texts against one built tree.
///
/// The coder borrows the tree (decode walks it) and owns the code table
/// derived from it (encode looks codes up).
pub struct HuffmanCoder<'a> {
    encoding_table: CodeTable,
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanCoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> HuffmanCoder<'a> {
        Self::from_parts(tree, CodeTable::new(tree))
    }

    /// Pairs a tree with a code table that was derived from it.
    pub fn from_parts(tree: &'a HuffmanTree, encoding_table: CodeTable) -> HuffmanCoder<'a> {
        HuffmanCoder {
            encoding_table,
            tree,
        }
    }

    pub fn table(&self) -> &CodeTable {
        &self.encoding_table
    }

    /// Concatenates the code of every input symbol, in input order.
    pub fn encode_sequence(&self, text: &str) -> Result<String, CodingError> {
        let mut encoded = String::new();
        for symbol in text.chars() {
            let code = self
                .encoding_table
                .code(symbol)
                .ok_or(CodingError::UnknownSymbol(symbol))?;
            encoded.push_str(code);
        }
        Ok(encoded)
    }

    /// Walks the tree one digit at a time, emitting a symbol and resetting
    /// to the root at every real leaf.
    pub fn decode_sequence(&self, digits: &str) -> Result<String, CodingError> {
        if let NodeKind::Leaf { symbol } = &self.tree.root().kind {
            return decode_single_leaf(*symbol, digits);
        }
        let mut decoded = String::new();
        let mut current = self.tree.root_index();
        for (position, digit) in digits.chars().enumerate() {
            let child_index = digit
                .to_digit(10)
                .map(|value| value as usize)
                .ok_or(CodingError::InvalidEncoding(position))?;
            current = match &self.tree.node(current).kind {
                NodeKind::Inner { children } => *children
                    .get(child_index)
                    .ok_or(CodingError::InvalidEncoding(position))?,
                _ => return Err(CodingError::InvalidEncoding(position)),
            };
            match &self.tree.node(current).kind {
                NodeKind::Leaf { symbol } => {
                    decoded.push(*symbol);
                    current = self.tree.root_index();
                }
                NodeKind::Dummy => return Err(CodingError::InvalidEncoding(position)),
                NodeKind::Inner { .. } => {}
            }
        }
        if current != self.tree.root_index() {
            return Err(CodingError::TruncatedEncoding);
        }
        Ok(decoded)
    }
}

// A single-leaf tree codes its lone symbol as "0"; any other digit cannot
// stem from a matching encoder.
fn decode_single_leaf(symbol: Symbol, digits: &str) -> Result<String, CodingError> {
    let mut decoded = String::new();
    for (position, digit) in digits.chars().enumerate() {
        if digit != '0' {
            return Err(CodingError::InvalidEncoding(position));
        }
        decoded.push(symbol);
    }
    Ok(decoded)
}
