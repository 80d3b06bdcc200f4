use std::collections::BTreeMap;
use std::fmt;

use super::tree::{HuffmanTree, NodeKind};
use super::Symbol;

/// Mapping from each real symbol to its code, a string of digit characters
/// in `'0'..='9'`. Distinct root-to-leaf paths make the code set prefix-free.
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl CodeTable {
    pub fn new(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        fill_table(&mut codes, tree, tree.root_index(), String::new());
        CodeTable { codes }
    }

    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

fn fill_table(
    codes: &mut BTreeMap<Symbol, String>,
    tree: &HuffmanTree,
    index: usize,
    current_code: String,
) {
    match &tree.node(index).kind {
        NodeKind::Leaf { symbol } => {
            // a lone root leaf has an empty path, its code is fixed to "0"
            let code = if current_code.is_empty() {
                String::from("0")
            } else {
                current_code
            };
            codes.insert(*symbol, code);
        }
        NodeKind::Dummy => {}
        NodeKind::Inner { children } => {
            for (digit, &child) in children.iter().enumerate() {
                let mut child_code = current_code.clone();
                child_code.push(digit_character(digit));
                fill_table(codes, tree, child, child_code);
            }
        }
    }
}

fn digit_character(digit: usize) -> char {
    char::from_digit(digit as u32, 10).expect("child index exceeds the digit alphabet")
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.codes.iter() {
            writeln!(f, "{:?} -> {}", symbol, code)?;
        }
        Ok(())
    }
}
