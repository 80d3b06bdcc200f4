use nary_huffman::frequency::FrequencyTable;
use nary_huffman::huffman::{CodingError, HuffmanCoder, HuffmanTree};

fn main() -> Result<(), CodingError> {
    let text = "abracadabra";
    let arity = 3;

    let frequency_table = FrequencyTable::from_text(text);
    println!("frequency table\n{}", frequency_table);

    let tree = HuffmanTree::new(&frequency_table.to_sorted_pairs(), arity)?;
    println!("code tree\n{}", tree);

    let coder = HuffmanCoder::new(&tree);
    println!("code table\n{}", coder.table());

    let encoded = coder.encode_sequence(text)?;
    println!("encoded sequence\n{}", encoded);

    let decoded = coder.decode_sequence(&encoded)?;
    println!("decoded sequence\n{}", decoded);
    Ok(())
}
