use std::{
    fs,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use threadpool::ThreadPool;

pub use cli::CLIParser;
use error::Error;
use frequency::FrequencyTable;
use huffman::{HuffmanCoder, HuffmanTree};
use statistics::CompressionStatistics;

mod cli;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod statistics;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    arity: usize,
    number_of_threads: usize,
    show_tree: bool,
}

fn read_input_text(file_path: Option<&Path>) -> Result<String> {
    match file_path {
        Some(file_path) => fs::read_to_string(file_path).map_err(|e| {
            Error::UnableToOpenInputFileForReading(file_path.to_str().unwrap().to_owned(), e)
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(Error::FailedToReadFromStandardInput)?;
            Ok(text)
        }
    }
}

fn write_encoded_output(file_path: &Path, encoded: &str) -> Result<()> {
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_str().unwrap().to_owned(), e)
        })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(encoded.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(Error::FailedToWriteEncodedOutput)
}

fn count_frequencies(text: &str, number_of_threads: usize) -> FrequencyTable {
    if number_of_threads > 1 {
        let pool = ThreadPool::new(number_of_threads);
        FrequencyTable::from_text_parallel(text, &pool)
    } else {
        FrequencyTable::from_text(text)
    }
}

pub fn run_entropy_coder(arguments: &Arguments) -> Result<()> {
    let text = read_input_text(arguments.input_file.as_deref())?;
    let frequency_table = count_frequencies(&text, arguments.number_of_threads);
    log::info!(
        "counted {} distinct symbols over {} input symbols",
        frequency_table.distinct_symbols(),
        frequency_table.total_count()
    );
    let tree = HuffmanTree::new(&frequency_table.to_sorted_pairs(), arguments.arity)?;
    if arguments.show_tree {
        println!("code tree\n{}", tree);
    }
    let coder = HuffmanCoder::new(&tree);
    let encoded = coder.encode_sequence(&text)?;
    let decoded = coder.decode_sequence(&encoded)?;
    logger::log_coding_summary(
        arguments.arity,
        frequency_table.distinct_symbols(),
        encoded.chars().count(),
    );

    println!("frequency table\n{}", frequency_table);
    println!("code table\n{}", coder.table());
    let statistics = CompressionStatistics::measure(&frequency_table, &encoded, tree.arity());
    println!("{}\n", statistics);
    match &arguments.output_file {
        Some(file_path) => {
            write_encoded_output(file_path, &encoded)?;
            log::info!(
                "wrote {} digits to {}",
                encoded.chars().count(),
                file_path.display()
            );
        }
        None => {
            println!("encoded sequence\n{}", encoded);
            println!("decoded sequence\n{}", decoded);
        }
    }
    Ok(())
}
