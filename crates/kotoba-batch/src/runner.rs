use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use kotoba_jisho::DefinitionSource;

use crate::output::{NOT_FOUND_HEADER, format_record};
use crate::progress::ProgressReporter;
use crate::tokenize::{count_tokens, tokenize};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read input file {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of one completed run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub found: usize,
    /// Words with no usable definition, in encounter order.
    pub not_found: Vec<String>,
}

/// Look up every word in `input_path` and write formatted records to
/// `output_path`.
///
/// Lookups run strictly one at a time. A failed or empty lookup demotes that
/// word to the trailing not-found section instead of aborting the run; only
/// file I/O is fatal. An unreadable input file fails before the output file
/// is created.
pub async fn run(
    source: &dyn DefinitionSource,
    input_path: &Path,
    output_path: &Path,
    reporter: &dyn ProgressReporter,
) -> Result<BatchReport, BatchError> {
    let input = fs::read_to_string(input_path).map_err(|source| BatchError::Input {
        path: input_path.to_path_buf(),
        source,
    })?;
    let total = count_tokens(&input);

    let file = File::create(output_path).map_err(|source| BatchError::Output {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let outcome = write_records(source, &input, total, &mut out, reporter).await;
    reporter.clear_current_word();

    outcome.map_err(|source| BatchError::Output {
        path: output_path.to_path_buf(),
        source,
    })
}

async fn write_records(
    source: &dyn DefinitionSource,
    input: &str,
    total: usize,
    out: &mut impl Write,
    reporter: &dyn ProgressReporter,
) -> std::io::Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut checked = 0usize;

    for line in input.lines() {
        for word in tokenize(line) {
            reporter.set_current_word(word);

            match source.lookup(word).await {
                Ok(Some(def)) => {
                    writeln!(out, "{}", format_record(&def))?;
                    report.found += 1;
                }
                Ok(None) => report.not_found.push(word.to_string()),
                Err(err) => {
                    tracing::warn!("lookup failed for {word}: {err}");
                    report.not_found.push(word.to_string());
                }
            }

            checked += 1;
            reporter.progress(checked as f64 / total as f64);
        }
    }

    if !report.not_found.is_empty() {
        writeln!(out)?;
        writeln!(out, "{NOT_FOUND_HEADER}")?;
        for word in &report.not_found {
            writeln!(out, "{word}")?;
        }
    }

    out.flush()?;
    Ok(report)
}
