use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const GENERATE_CMD: &str = "generate";

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Print every telomere fragment of a given length for a repeat unit.")
        .arg(
            arg!(--repeat <MOTIF>)
                .short('r')
                .help("Repeat unit of the telomere, e.g. CCCTAAA")
                .required(true),
        )
        .arg(
            arg!(--length <LENGTH>)
                .short('l')
                .help("Fragment length")
                .value_parser(value_parser!(usize))
                .required(true),
        )
        .arg(
            Arg::new("no-reverse")
                .long("no-reverse")
                .help("Do not add fragments of the reverse complement")
                .action(ArgAction::SetTrue),
        )
}
