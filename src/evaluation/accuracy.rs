use thiserror::Error;

use crate::classifiers::NaiveBayes;
use crate::core::DataSet;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("cannot evaluate on a data set with no observations")]
    EmptyDataSet,
}

/// Classification accuracy of a model over one data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    correct: usize,
    total: usize,
}

impl Accuracy {
    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Accuracy as a percentage in `[0, 100]`.
    pub fn percent(&self) -> f64 {
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// One report line, with the percentage padded to at least two integer
    /// digits and one decimal place (`05.0`, `87.5`, `100.0`).
    pub fn report(&self, set_name: &str) -> String {
        format!(
            "Accuracy on {} set ({} instances): {:04.1}%",
            set_name,
            self.total,
            self.percent()
        )
    }
}

/// Classifies every observation of `set` and counts matches against the
/// aligned labels. An empty set has no defined accuracy and is rejected.
pub fn evaluate(model: &NaiveBayes, set: &DataSet) -> Result<Accuracy, EvaluationError> {
    if set.is_empty() {
        return Err(EvaluationError::EmptyDataSet);
    }

    let mut correct = 0usize;
    for (row, &label) in set.observations().iter().zip(set.labels()) {
        if model.classify(row) == label {
            correct += 1;
        }
    }

    Ok(Accuracy {
        correct,
        total: set.len(),
    })
}
