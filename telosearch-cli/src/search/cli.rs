use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const SEARCH_CMD: &str = "search";
pub const DEFAULT_FORMAT: &str = "tsv";

pub fn create_search_cli() -> Command {
    Command::new(SEARCH_CMD)
        .about("Report which sequences are telomere fragments of a repeat unit.")
        .arg(
            Arg::new("candidates")
                .help("File with one sequence per line (.gz allowed), or '-' for stdin")
                .required(true),
        )
        .arg(
            arg!(--repeat <MOTIF>)
                .short('r')
                .help("Repeat unit of the telomere, e.g. CCCTAAA")
                .required(true),
        )
        .arg(
            Arg::new("no-reverse")
                .long("no-reverse")
                .help("Do not accept rotations of the reverse complement")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--threads <NUMBER>)
                .short('t')
                .help("Number of worker threads (default: all cores)")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--config <FILE>).short('c').help("TOML search config"))
        .arg(
            arg!(--format <FORMAT>)
                .help("Output format")
                .value_parser(["tsv", "json"])
                .default_value(DEFAULT_FORMAT),
        )
        .arg(
            arg!(--output <FILE>)
                .short('o')
                .help("Write results here instead of stdout (.gz compresses)"),
        )
}
