use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{CodingError, Symbol, MAX_ARITY, MIN_ARITY};

#[derive(Clone, Debug)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    Dummy,
    Inner { children: Vec<usize> },
}

#[derive(Clone, Debug)]
pub(super) struct Node {
    pub(super) frequency: usize,
    pub(super) kind: NodeKind,
}

/// An n-ary code tree over the input alphabet.
///
/// Nodes live in an arena and reference their children by index. The tree is
/// immutable once built; coders only ever read it.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    arity: usize,
    dummy_leaf_count: usize,
}

#[derive(Clone, Copy)]
struct HeapEntry {
    frequency: usize,
    sequence: usize,
    index: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

// Each merge step removes arity nodes and adds one, shrinking the list by
// arity - 1. Padding makes the initial leaf count satisfy
// (leaves - 1) % (arity - 1) == 0, so the loop ends on exactly one root.
fn required_dummy_leaves(leaf_count: usize, arity: usize) -> usize {
    let remainder = (leaf_count - 1) % (arity - 1);
    if remainder == 0 {
        0
    } else {
        arity - 1 - remainder
    }
}

impl HuffmanTree {
    /// Builds the code tree for the given symbol frequencies.
    ///
    /// The pair order fixes the tie-break between equal frequencies, so
    /// callers passing a deterministic order get a deterministic tree.
    pub fn new(
        symbols_and_frequencies: &[(Symbol, usize)],
        arity: usize,
    ) -> Result<HuffmanTree, CodingError> {
        if !(MIN_ARITY..=MAX_ARITY).contains(&arity) {
            return Err(CodingError::InvalidArity(arity));
        }
        if symbols_and_frequencies.is_empty() {
            return Err(CodingError::EmptySymbolSet);
        }

        let mut nodes: Vec<Node> = symbols_and_frequencies
            .iter()
            .map(|&(symbol, frequency)| Node {
                frequency,
                kind: NodeKind::Leaf { symbol },
            })
            .collect();

        let dummy_leaf_count = required_dummy_leaves(nodes.len(), arity);
        for _ in 0..dummy_leaf_count {
            nodes.push(Node {
                frequency: 0,
                kind: NodeKind::Dummy,
            });
        }
        if dummy_leaf_count > 0 {
            log::debug!(
                "padded {} leaves with {} placeholder leaves for arity {}",
                symbols_and_frequencies.len(),
                dummy_leaf_count,
                arity
            );
        }

        let mut heap = BinaryHeap::new();
        for (index, node) in nodes.iter().enumerate() {
            heap.push(Reverse(HeapEntry {
                frequency: node.frequency,
                sequence: index,
                index,
            }));
        }

        // merge the arity smallest nodes until one root remains
        let mut sequence = nodes.len();
        while heap.len() > 1 {
            let mut children = Vec::with_capacity(arity);
            let mut frequency = 0;
            for _ in 0..arity {
                let entry = heap.pop().unwrap().0;
                frequency += entry.frequency;
                children.push(entry.index);
            }
            let index = nodes.len();
            nodes.push(Node {
                frequency,
                kind: NodeKind::Inner { children },
            });
            heap.push(Reverse(HeapEntry {
                frequency,
                sequence,
                index,
            }));
            sequence += 1;
        }

        let root_index = heap.pop().unwrap().0.index;
        Ok(HuffmanTree {
            nodes,
            root_index,
            arity,
            dummy_leaf_count,
        })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of zero-frequency placeholder leaves the builder inserted.
    pub fn dummy_leaf_count(&self) -> usize {
        self.dummy_leaf_count
    }

    pub(super) fn root_index(&self) -> usize {
        self.root_index
    }

    pub(super) fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        depth: usize,
        edge: Option<usize>,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let label = match edge {
            Some(digit) => format!("{} -> ", digit),
            None => String::new(),
        };
        let node = &self.nodes[index];
        match &node.kind {
            NodeKind::Leaf { symbol } => writeln!(
                f,
                "{}{}Leaf {:?} [frequency: {}]",
                indent, label, symbol, node.frequency
            ),
            NodeKind::Dummy => writeln!(f, "{}{}Dummy [frequency: 0]", indent, label),
            NodeKind::Inner { children } => {
                writeln!(
                    f,
                    "{}{}Internal [frequency: {}]",
                    indent, label, node.frequency
                )?;
                for (digit, &child) in children.iter().enumerate() {
                    self.fmt_node(f, child, depth + 1, Some(digit))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root_index, 0, None)
    }
}
