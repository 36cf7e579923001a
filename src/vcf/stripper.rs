use super::format::TagRemovalPlan;
use crate::utils::TransformError;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::io::{BufRead, Write};

const HEADER_PREFIX: u8 = b'#';
const FORMAT_COLUMN: usize = 8;
pub const BATCH_SIZE: usize = 4096;

#[derive(Debug, PartialEq, Eq)]
pub struct StrippedLine {
    pub text: String,
    pub is_data: bool,
    pub tags_removed: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct StripStats {
    pub lines: usize,
    pub data_lines: usize,
    pub modified_lines: usize,
    pub tags_removed: usize,
}

impl StripStats {
    fn record(&mut self, line: &StrippedLine) {
        self.lines += 1;
        if line.is_data {
            self.data_lines += 1;
        }
        if line.tags_removed > 0 {
            self.modified_lines += 1;
            self.tags_removed += line.tags_removed;
        }
    }
}

fn split_terminator(line: &str) -> (&str, &str) {
    let body = line.trim_end_matches(['\n', '\r']);
    (body, &line[body.len()..])
}

/// Removes the phasing tags from one VCF line.
///
/// `line` may carry its line terminator, which is reproduced as-is.
/// Header lines and lines without a FORMAT column are returned unchanged.
pub fn strip_line(line: &str, line_number: usize) -> Result<StrippedLine, TransformError> {
    let verbatim = |is_data| StrippedLine {
        text: line.to_string(),
        is_data,
        tags_removed: 0,
    };
    if line.as_bytes().first() == Some(&HEADER_PREFIX) {
        return Ok(verbatim(false));
    }

    let (body, terminator) = split_terminator(line);
    let columns: Vec<&str> = body.split_ascii_whitespace().collect();
    if columns.len() <= FORMAT_COLUMN {
        log::trace!("Line {} has no FORMAT column", line_number);
        return Ok(verbatim(!columns.is_empty()));
    }

    let plan = TagRemovalPlan::from_format(columns[FORMAT_COLUMN]);
    let mut fields: Vec<String> = columns[..FORMAT_COLUMN]
        .iter()
        .map(|c| c.to_string())
        .collect();
    for (index, field) in columns[FORMAT_COLUMN..].iter().enumerate() {
        let stripped = plan.apply(field).ok_or_else(|| TransformError::MalformedLine {
            line: line_number,
            reason: format!(
                "sample column {} ({}) has fewer values than FORMAT {}",
                index,
                field,
                columns[FORMAT_COLUMN]
            ),
        })?;
        fields.push(stripped);
    }

    let mut text = fields.join("\t");
    text.push_str(terminator);
    Ok(StrippedLine {
        text,
        is_data: true,
        tags_removed: plan.len(),
    })
}

/// Decodes and strips one raw input line.
///
/// Header lines are left undecoded (`None`) so that they can be copied back
/// byte for byte.
fn strip_raw_line(line: &[u8], line_number: usize) -> Result<Option<StrippedLine>, TransformError> {
    if line.first() == Some(&HEADER_PREFIX) {
        return Ok(None);
    }
    let text = std::str::from_utf8(line).map_err(|e| TransformError::MalformedLine {
        line: line_number,
        reason: format!("invalid UTF-8: {}", e),
    })?;
    strip_line(text, line_number).map(Some)
}

fn strip_batch(
    batch: &[(usize, Vec<u8>)],
    pool: &ThreadPool,
) -> Result<Vec<Option<StrippedLine>>, TransformError> {
    let results: Vec<_> = pool.install(|| {
        batch
            .par_iter()
            .map(|(line_number, line)| strip_raw_line(line, *line_number))
            .collect()
    });
    // Results are in input order, so this reports the lowest failing line.
    results.into_iter().collect()
}

/// Streams `reader` into `writer`, removing the phasing tags from every
/// data line.
///
/// Lines are transformed in batches on `pool` and written back in input
/// order. The malformed line with the lowest line number aborts the run.
pub fn strip_phasing_fields<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    pool: &ThreadPool,
) -> Result<StripStats, TransformError> {
    let mut stats = StripStats::default();
    let mut line_number = 0;
    loop {
        let mut batch = Vec::with_capacity(BATCH_SIZE);
        while batch.len() < BATCH_SIZE {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            line_number += 1;
            batch.push((line_number, line));
        }
        if batch.is_empty() {
            break;
        }

        let stripped_lines = strip_batch(&batch, pool)?;
        for ((_, raw), stripped) in batch.iter().zip(stripped_lines) {
            match stripped {
                Some(stripped) => {
                    writer.write_all(stripped.text.as_bytes())?;
                    stats.record(&stripped);
                }
                None => {
                    writer.write_all(raw)?;
                    stats.lines += 1;
                }
            }
        }
        log::debug!("Processed {} lines", line_number);
        if batch.len() < BATCH_SIZE {
            break;
        }
    }
    writer.flush()?;
    Ok(stats)
}
