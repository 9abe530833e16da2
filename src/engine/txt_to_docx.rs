//! Per-file conversion: one text file in, one `.docx` out.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::ConversionResult;
use crate::engine::document::DocxWriter;
use crate::engine::tools::output_path_for;
use crate::error::ConvertError;
use crate::utils::{discard_temp, rename_temp_to_final, temp_path_for};

/// Paragraph texts carried by one physical line: split on stray `\r`, trimmed, blanks dropped.
pub fn line_paragraphs(line: &str) -> impl Iterator<Item = &str> {
    line.split('\r').map(str::trim).filter(|s| !s.is_empty())
}

/// Convert `source` into `<output_dir>/<stem>.<output_extension>`.
/// Never fails: every error is folded into [`ConversionResult::Failure`].
pub fn convert_file(source: &Path, output_dir: &Path, output_extension: &str) -> ConversionResult {
    let output = output_path_for(source, output_dir, output_extension);
    match write_document(source, &output) {
        Ok(paragraphs) => {
            debug!(
                "{} -> {} ({} paragraphs)",
                source.display(),
                output.display(),
                paragraphs
            );
            ConversionResult::Success {
                source: source.to_path_buf(),
                output,
            }
        }
        Err(error) => ConversionResult::Failure {
            source: source.to_path_buf(),
            error,
        },
    }
}

/// Write the document for `source` to `output` via a temp file, replacing `output` only on
/// success. Returns the paragraph count.
pub fn write_document(source: &Path, output: &Path) -> Result<usize, ConvertError> {
    let input = File::open(source).map_err(|e| ConvertError::Open {
        path: source.to_path_buf(),
        source: e,
    })?;
    let temp = temp_path_for(output);
    let paragraphs = match stream_paragraphs(BufReader::new(input), &temp) {
        Ok(n) => n,
        Err(e) => {
            discard_temp(&temp);
            return Err(e);
        }
    };
    if let Err(e) = rename_temp_to_final(&temp, output) {
        discard_temp(&temp);
        return Err(ConvertError::Persist {
            path: output.to_path_buf(),
            source: e,
        });
    }
    Ok(paragraphs)
}

/// Read `reader` line by line and stream each paragraph into a new document at `dest`.
pub fn stream_paragraphs<R: BufRead>(reader: R, dest: &Path) -> Result<usize, ConvertError> {
    let mut doc = DocxWriter::create(dest)?;
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| ConvertError::Read {
            line: line_no,
            source: e,
        })?;
        for text in line_paragraphs(&line) {
            doc.push_paragraph(text, line_no)?;
        }
    }
    doc.finish()
}
