use std::collections::BTreeMap;
use std::fmt;
use std::mem;
use std::sync::mpsc;

use threadpool::ThreadPool;

use crate::huffman::Symbol;

/// Occurrence counts of every distinct symbol of an input text.
///
/// Iteration is symbol-ascending, which fixes the leaf order the tree
/// builder's tie-break relies on.
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> FrequencyTable {
        let mut counts = BTreeMap::new();
        for symbol in text.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    /// Counts chunks of the input on the pool's workers and merges the
    /// partial tables. Produces the same table as [`FrequencyTable::from_text`].
    pub fn from_text_parallel(text: &str, pool: &ThreadPool) -> FrequencyTable {
        let chunks = split_into_chunks(text, pool.max_count());
        if chunks.len() < 2 {
            return Self::from_text(text);
        }
        let chunk_count = chunks.len();
        let (sender, receiver) = mpsc::channel();
        for chunk in chunks {
            let sender = sender.clone();
            pool.execute(move || {
                sender
                    .send(FrequencyTable::from_text(&chunk))
                    .expect("receiver outlives the pool jobs");
            });
        }
        let mut counts = BTreeMap::new();
        for partial in receiver.iter().take(chunk_count) {
            for (symbol, count) in partial.counts {
                *counts.entry(symbol).or_insert(0) += count;
            }
        }
        FrequencyTable { counts }
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn distinct_symbols(&self) -> usize {
        self.counts.len()
    }

    pub fn total_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Symbol-ascending pairs, the input order for tree construction.
    pub fn to_sorted_pairs(&self) -> Vec<(Symbol, usize)> {
        self.counts
            .iter()
            .map(|(&symbol, &count)| (symbol, count))
            .collect()
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.counts.iter() {
            writeln!(f, "{:?}: {}", symbol, count)?;
        }
        Ok(())
    }
}

// Splits at character boundaries into at most `parts` chunks of roughly
// equal symbol count.
fn split_into_chunks(text: &str, parts: usize) -> Vec<String> {
    let symbol_count = text.chars().count();
    if symbol_count == 0 || parts < 2 {
        return vec![text.to_owned()];
    }
    let chunk_length = symbol_count.div_ceil(parts);
    let mut chunks = Vec::with_capacity(parts);
    let mut current = String::new();
    for (index, symbol) in text.chars().enumerate() {
        current.push(symbol);
        if (index + 1) % chunk_length == 0 {
            chunks.push(mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
