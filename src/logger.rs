#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_coding_summary(arity: usize, distinct_symbols: usize, encoded_digits: usize) {
    log::info!(
        "arity-{} code over {} distinct symbols produced {} digits",
        arity,
        distinct_symbols,
        encoded_digits
    );
}
