use std::io::{BufWriter, Write};

use anyhow::Result;
use clap::ArgMatches;

use telosearch_core::gen_telomeres;

pub fn run_generate(matches: &ArgMatches) -> Result<()> {
    let motif = matches
        .get_one::<String>("repeat")
        .expect("A repeat unit is required.");

    let length = *matches
        .get_one::<usize>("length")
        .expect("A fragment length is required.");

    let include_reverse = !matches.get_flag("no-reverse");

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_telomeres(&mut writer, motif, length, include_reverse)?;
    writer.flush()?;

    Ok(())
}

fn write_telomeres<W: Write>(
    writer: &mut W,
    motif: &str,
    length: usize,
    include_reverse: bool,
) -> Result<()> {
    for telomere in gen_telomeres(motif, length, include_reverse)? {
        writeln!(writer, "{}", telomere)?;
    }
    Ok(())
}
