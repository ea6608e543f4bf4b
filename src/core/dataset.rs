use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::error::DataSetError;

/// Immutable boolean observation table with an aligned label vector.
///
/// The last column name names the class label; every observation row holds
/// one value per remaining column. A `DataSet` is validated once on
/// construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    column_names: Vec<String>,
    observations: Vec<Vec<bool>>,
    labels: Vec<bool>,
}

impl DataSet {
    fn new(
        column_names: Vec<String>,
        observations: Vec<Vec<bool>>,
        labels: Vec<bool>,
        source: &str,
    ) -> Result<DataSet, DataSetError> {
        if let Some(first) = observations.first() {
            let width = first.len();
            if column_names.len() != width + 1 {
                return Err(DataSetError::ShapeMismatch {
                    source: source.to_string(),
                    detail: format!(
                        "header names {} columns but rows carry {} attribute values plus a label",
                        column_names.len(),
                        width
                    ),
                });
            }
            for (index, row) in observations.iter().enumerate() {
                if row.len() != width {
                    return Err(DataSetError::ShapeMismatch {
                        source: source.to_string(),
                        detail: format!(
                            "row {} has {} attribute values, expected {}",
                            index + 1,
                            row.len(),
                            width
                        ),
                    });
                }
            }
        }
        if labels.len() != observations.len() {
            return Err(DataSetError::ShapeMismatch {
                source: source.to_string(),
                detail: format!(
                    "{} labels for {} observations",
                    labels.len(),
                    observations.len()
                ),
            });
        }

        Ok(DataSet {
            column_names,
            observations,
            labels,
        })
    }

    /// Parses a data set from a file of whitespace-separated tokens.
    ///
    /// The first non-blank line is the header (attribute names followed by
    /// the class-label name); every following non-blank line is one
    /// observation, its last token being the label.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DataSet, DataSetError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Self::parse_lines(
            lines.iter().map(String::as_str),
            &path.display().to_string(),
        )
    }

    /// Parses a data set from in-memory text with the same line grammar as
    /// [`DataSet::from_file`]. Lines are separated by ASCII newlines.
    pub fn from_text(data: &str) -> Result<DataSet, DataSetError> {
        Self::parse_lines(data.split('\n'), "<text>")
    }

    fn parse_lines<'a, I>(lines: I, source: &str) -> Result<DataSet, DataSetError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter();

        // Move past blank lines; the first non-blank line is the header.
        let column_names: Vec<String> = loop {
            match lines.next() {
                Some(line) if !line.trim().is_empty() => {
                    break line.split_whitespace().map(str::to_string).collect();
                }
                Some(_) => continue,
                None => {
                    return Err(DataSetError::EmptyInput {
                        source: source.to_string(),
                    });
                }
            }
        };

        let mut observations = Vec::new();
        let mut labels = Vec::new();
        for line in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some((label, attributes)) = tokens.split_last() else {
                continue;
            };
            // Lenient truthiness: "1" is true, anything else is false.
            labels.push(*label == "1");
            observations.push(attributes.iter().map(|token| *token == "1").collect());
        }

        Self::new(column_names, observations, labels, source)
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn observations(&self) -> &[Vec<bool>] {
        &self.observations
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// Name of the class-label column (the last header token).
    pub fn label_name(&self) -> &str {
        self.column_names.last().map_or("", String::as_str)
    }

    pub fn attribute_count(&self) -> usize {
        self.column_names.len().saturating_sub(1)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl fmt::Display for DataSet {
    /// Reproduces the parse grammar: space-joined header, then one line per
    /// observation with "1"/"0" attribute values followed by the label, every
    /// line newline-terminated (including the last).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.column_names.join(" "))?;
        for (row, &label) in self.observations.iter().zip(&self.labels) {
            for &value in row {
                write!(f, "{} ", if value { '1' } else { '0' })?;
            }
            writeln!(f, "{}", if label { '1' } else { '0' })?;
        }
        Ok(())
    }
}
