use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use serde::Serialize;

///
/// Get a reader for either a gzip'd or non-gzip'd file
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a reader for a file path, or stdin when the path is '-'
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Get a writer for a file path (gzip'd when it ends in .gz), or stdout when
/// no path is given
///
pub fn get_dynamic_writer(path: Option<&str>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(std::io::stdout())));
    };

    let path = Path::new(path);
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    if path.extension() == Some(OsStr::new("gz")) {
        Ok(Box::new(BufWriter::new(GzEncoder::new(
            file,
            Compression::default(),
        ))))
    } else {
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Read one sequence per line, trimming surrounding whitespace and skipping
/// blank lines.
pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
        let sequence = line.trim();
        if !sequence.is_empty() {
            candidates.push(sequence.to_string());
        }
    }
    Ok(candidates)
}

#[derive(Debug, Serialize)]
struct TelomereCall<'a> {
    sequence: &'a str,
    is_telomere: bool,
}

pub fn write_results_tsv<W: Write>(
    writer: &mut W,
    candidates: &[String],
    results: &[bool],
) -> Result<()> {
    writeln!(writer, "sequence\tis_telomere")?;
    for (sequence, is_telomere) in candidates.iter().zip(results) {
        writeln!(writer, "{}\t{}", sequence, is_telomere)?;
    }
    Ok(())
}

pub fn write_results_json<W: Write>(
    writer: &mut W,
    candidates: &[String],
    results: &[bool],
) -> Result<()> {
    let calls: Vec<TelomereCall> = candidates
        .iter()
        .zip(results)
        .map(|(sequence, &is_telomere)| TelomereCall {
            sequence,
            is_telomere,
        })
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &calls)?;
    writeln!(writer)?;
    Ok(())
}
