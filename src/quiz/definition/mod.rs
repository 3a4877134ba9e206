use csv::StringRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

use crate::error::QuizError;

pub mod problem;

pub use problem::{build_problems, Problem};

#[derive(Debug)]
pub struct QuizDefinition {
    problems: Vec<Problem>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, QuizError> {
        let file = File::open(source).map_err(|e| QuizError::FileOpen {
            path: source.to_path_buf(),
            source: e,
        })?;
        let definition = QuizDefinition::from_reader(file).map_err(|e| QuizError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;
        info!(
            path = %source.display(),
            problems = definition.problems.len(),
            "loaded quiz definition"
        );
        Ok(definition)
    }

    /// Reads headerless `question,answer` records. Records may have any number of
    /// fields, but a stray or unterminated `"` fails the whole read.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<QuizDefinition, csv::Error> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_slice());
        let records = csv_reader
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()?;

        for (index, record) in records.iter().enumerate() {
            let position = match record.position() {
                Some(position) => position,
                None => continue,
            };
            let start = position.byte() as usize;
            let end = records
                .get(index + 1)
                .and_then(|next| next.position())
                .map_or(raw.len(), |next| next.byte() as usize);
            if !is_quoting_well_formed(&raw[start..end]) {
                return Err(csv::Error::from(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "line {}: extraneous or missing \" in quoted field",
                        position.line()
                    ),
                )));
            }
        }

        Ok(QuizDefinition {
            problems: build_problems(&records),
        })
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}

/// A quote may only open a field, and inside a quoted field it must be doubled
/// or close the field right before a delimiter or line end.
fn is_quoting_well_formed(raw: &[u8]) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;
    while i < raw.len() {
        let byte = raw[i];
        if in_quotes {
            if byte == b'"' {
                match raw.get(i + 1) {
                    Some(b'"') => i += 1,
                    None | Some(b',') | Some(b'\n') | Some(b'\r') => in_quotes = false,
                    Some(_) => return false,
                }
            }
        } else if byte == b'"' {
            if !field_start {
                return false;
            }
            in_quotes = true;
        }
        field_start = !in_quotes && matches!(byte, b',' | b'\n' | b'\r');
        i += 1;
    }
    !in_quotes
}
