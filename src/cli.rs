use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_arity_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_show_tree_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_arity_argument(command: Command) -> Command {
        command.arg(Self::create_arity_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to input text file, reads standard input when omitted")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_output_file_argument() -> Arg {
        arg!(output_file: -o --output <FILE> "Path to write the encoded digit sequence to")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_arity_argument() -> Arg {
        arg!(arity: -n --arity <ARITY> "Number of children per internal tree node")
            .default_value("2")
            .value_parser(value_parser!(usize))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of threads for frequency counting")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: --show_tree "Print the code tree before encoding")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            arity: Self::extract_arity_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            show_tree: Self::extract_show_tree_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_file").cloned()
    }

    fn extract_arity_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("arity")
            .expect("Arity must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::CLIParser;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.unwrap().file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_missing_input_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert!(input_file.is_none());
    }

    #[test]
    fn parse_output_file_argument() {
        let output_file_name = "encoded.digits";
        let command = Command::new("test");
        let command = CLIParser::register_output_file_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--output", output_file_name]);
        let output_file = CLIParser::extract_output_file_argument(&matches);
        assert_eq!(output_file.unwrap().file_name().unwrap(), output_file_name);
    }

    #[test]
    fn parse_arity_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_arity_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--arity", "4"]);
        let arity = CLIParser::extract_arity_argument(&matches);
        assert_eq!(arity, 4);
    }

    #[test]
    fn parse_default_arity_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_arity_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let arity = CLIParser::extract_arity_argument(&matches);
        assert_eq!(arity, 2);
    }

    #[test]
    fn parse_arity_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_arity_argument(command);
        let result =
            command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--arity", "three"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for arity not detected");
        }
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_show_tree_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_show_tree_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--show_tree"]);
        assert!(CLIParser::extract_show_tree_argument(&matches));
    }

    #[test]
    fn parse_required_arguments_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT]);
        assert!(arguments.input_file.is_none(), "input file does not match");
        assert!(arguments.output_file.is_none(), "output file does not match");
        assert_eq!(arguments.arity, 2, "arity does not match");
        assert!(!arguments.show_tree, "show_tree does not match");
        assert!(
            arguments.number_of_threads >= 1,
            "number_of_threads does not match"
        );
    }

    #[test]
    fn parse_all_arguments() {
        let input_file_name = "inputfile.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let output_file_name = "outputfile.digits";
        let output_file_path = format!("/output_directory/{}", output_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &input_file_path,
            "-o",
            &output_file_path,
            "-n",
            "3",
            "-t",
            "8",
        ]);
        assert_eq!(
            arguments.input_file.unwrap().file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file.unwrap().file_name().unwrap(),
            output_file_name,
            "output file does not match"
        );
        assert_eq!(arguments.arity, 3, "arity does not match");
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
    }
}
