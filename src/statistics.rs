use std::fmt;

use crate::frequency::FrequencyTable;

/// Size accounting for one encode run. The baseline is the shortest
/// fixed-length code over the same alphabet and the same digit arity.
pub struct CompressionStatistics {
    input_symbol_count: usize,
    encoded_digit_count: usize,
    fixed_code_digit_count: usize,
}

impl CompressionStatistics {
    pub fn measure(
        frequency_table: &FrequencyTable,
        encoded: &str,
        arity: usize,
    ) -> CompressionStatistics {
        let input_symbol_count = frequency_table.total_count();
        let code_length = fixed_code_length(frequency_table.distinct_symbols(), arity);
        CompressionStatistics {
            input_symbol_count,
            encoded_digit_count: encoded.chars().count(),
            fixed_code_digit_count: input_symbol_count * code_length,
        }
    }

    pub fn input_symbol_count(&self) -> usize {
        self.input_symbol_count
    }

    pub fn encoded_digit_count(&self) -> usize {
        self.encoded_digit_count
    }

    pub fn fixed_code_digit_count(&self) -> usize {
        self.fixed_code_digit_count
    }

    pub fn average_code_length(&self) -> f64 {
        if self.input_symbol_count == 0 {
            return 0.0;
        }
        self.encoded_digit_count as f64 / self.input_symbol_count as f64
    }

    pub fn compression_ratio(&self) -> f64 {
        if self.fixed_code_digit_count == 0 {
            return 0.0;
        }
        self.encoded_digit_count as f64 / self.fixed_code_digit_count as f64
    }
}

// Digits one symbol takes in a fixed-length code of the given arity, the
// smallest l with arity^l >= distinct_symbols.
fn fixed_code_length(distinct_symbols: usize, arity: usize) -> usize {
    let mut length = 1;
    let mut capacity = arity;
    while capacity < distinct_symbols {
        capacity *= arity;
        length += 1;
    }
    length
}

impl fmt::Display for CompressionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input symbols:       {}", self.input_symbol_count)?;
        writeln!(f, "encoded digits:      {}", self.encoded_digit_count)?;
        writeln!(f, "fixed-length digits: {}", self.fixed_code_digit_count)?;
        writeln!(f, "average code length: {:.3}", self.average_code_length())?;
        write!(f, "compression ratio:   {:.3}", self.compression_ratio())
    }
}
