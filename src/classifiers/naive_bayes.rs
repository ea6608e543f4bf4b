use thiserror::Error;

use crate::core::DataSet;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("cannot train on a data set with no observations")]
    EmptyDataSet,

    #[error("every training label is {0}; both classes must be present")]
    SingleClass(bool),
}

/// Binary Naive Bayes model over boolean attributes.
///
/// Holds the sufficient statistics gathered by [`NaiveBayes::fit`]: the two
/// class counts and, per attribute, how many observations of each class had
/// that attribute true. Classification and the probability report are pure
/// functions of these counts (plus the column names kept for reporting).
///
/// Estimates are raw frequencies with no smoothing: a conditional count of
/// zero contributes a `log10(0) = -inf` term, which deterministically sinks
/// that class branch. This degeneracy is intentional.
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    column_names: Vec<String>,
    class_true_count: usize,
    class_false_count: usize,
    attr_given_true: Vec<usize>,
    attr_given_false: Vec<usize>,
}

impl NaiveBayes {
    /// Trains a model on `set` in a single pass over its observations.
    ///
    /// Fails fast when the set is empty or contains only one class value;
    /// either would make the class priors meaningless.
    pub fn fit(set: &DataSet) -> Result<NaiveBayes, TrainError> {
        if set.is_empty() {
            return Err(TrainError::EmptyDataSet);
        }

        let mut class_true_count = 0usize;
        let mut attr_given_true = vec![0usize; set.attribute_count()];
        let mut attr_given_false = vec![0usize; set.attribute_count()];

        for (row, &label) in set.observations().iter().zip(set.labels()) {
            if label {
                class_true_count += 1;
            }
            let counts = if label {
                &mut attr_given_true
            } else {
                &mut attr_given_false
            };
            for (slot, &attribute) in counts.iter_mut().zip(row) {
                if attribute {
                    *slot += 1;
                }
            }
        }

        let class_false_count = set.len() - class_true_count;
        if class_true_count == 0 || class_false_count == 0 {
            return Err(TrainError::SingleClass(class_true_count > 0));
        }

        Ok(NaiveBayes {
            column_names: set.column_names().to_vec(),
            class_true_count,
            class_false_count,
            attr_given_true,
            attr_given_false,
        })
    }

    /// Predicts the label for one attribute vector by comparing the two
    /// class log-odds. `attributes` must hold exactly
    /// [`attribute_count`](Self::attribute_count) values.
    ///
    /// An exact tie resolves to `true`. With degenerate counts a branch can
    /// become `-inf` or NaN; the final `>=` then yields `false` for NaN,
    /// matching the unsmoothed estimator's behavior.
    pub fn classify(&self, attributes: &[bool]) -> bool {
        let total = (self.class_true_count + self.class_false_count) as f64;
        let class_true = self.class_true_count as f64;
        let class_false = self.class_false_count as f64;

        let mut log_true = (class_true / total).log10();
        let mut log_false = (class_false / total).log10();

        for (i, &attribute) in attributes.iter().enumerate() {
            let true_count = self.attr_given_true[i] as f64;
            let false_count = self.attr_given_false[i] as f64;
            if attribute {
                log_true += (true_count / class_true).log10();
                log_false += (false_count / class_false).log10();
            } else {
                log_true += ((class_true - true_count) / class_true).log10();
                log_false += ((class_false - false_count) / class_false).log10();
            }
        }

        log_true >= log_false
    }

    /// Human-readable conditional-probability statistics, one line per class:
    /// the false-class line first, then the true-class line. The ordering is
    /// part of the report contract.
    pub fn probability_report(&self) -> [String; 2] {
        [self.class_report(false), self.class_report(true)]
    }

    fn class_report(&self, class: bool) -> String {
        let class_count = if class {
            self.class_true_count
        } else {
            self.class_false_count
        };
        let total = self.class_true_count + self.class_false_count;
        let class_token = if class { "1" } else { "0" };

        // Every token carries a trailing space, including the last one.
        let mut line = format!(
            "P({}={})={:.2} ",
            self.label_name(),
            class_token,
            class_count as f64 / total as f64
        );

        let conditionals = if class {
            &self.attr_given_true
        } else {
            &self.attr_given_false
        };
        for (name, &count) in self.column_names.iter().zip(conditionals) {
            let p_true = count as f64 / class_count as f64;
            let p_false = (class_count - count) as f64 / class_count as f64;
            line.push_str(&format!("P({name}=0|{class_token})={p_false:.2} "));
            line.push_str(&format!("P({name}=1|{class_token})={p_true:.2} "));
        }
        line
    }

    fn label_name(&self) -> &str {
        self.column_names.last().map_or("", String::as_str)
    }

    pub fn class_true_count(&self) -> usize {
        self.class_true_count
    }

    pub fn class_false_count(&self) -> usize {
        self.class_false_count
    }

    /// Per-attribute counts of attribute-true observations labeled true.
    pub fn attr_given_true(&self) -> &[usize] {
        &self.attr_given_true
    }

    /// Per-attribute counts of attribute-true observations labeled false.
    pub fn attr_given_false(&self) -> &[usize] {
        &self.attr_given_false
    }

    pub fn attribute_count(&self) -> usize {
        self.attr_given_true.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{correlated_dataset, skewed_dataset, xor_dataset};

    #[test]
    fn fit_gathers_sufficient_statistics() {
        let model = NaiveBayes::fit(&skewed_dataset()).unwrap();
        assert_eq!(model.class_true_count(), 2);
        assert_eq!(model.class_false_count(), 3);
        assert_eq!(model.attr_given_true(), [2, 1]);
        assert_eq!(model.attr_given_false(), [1, 1]);
        assert_eq!(model.attribute_count(), 2);
    }

    #[test]
    fn fit_rejects_empty_data_set() {
        let set = DataSet::from_text("A Y\n").unwrap();
        assert!(matches!(
            NaiveBayes::fit(&set),
            Err(TrainError::EmptyDataSet)
        ));
    }

    #[test]
    fn fit_rejects_single_class_data() {
        let all_true = DataSet::from_text("A Y\n1 1\n0 1\n").unwrap();
        assert!(matches!(
            NaiveBayes::fit(&all_true),
            Err(TrainError::SingleClass(true))
        ));

        let all_false = DataSet::from_text("A Y\n1 0\n0 0\n").unwrap();
        assert!(matches!(
            NaiveBayes::fit(&all_false),
            Err(TrainError::SingleClass(false))
        ));
    }

    #[test]
    fn exact_tie_classifies_true() {
        // Balanced labels with a symmetric attribute: every term of the two
        // log-odds sums is bit-identical, so the comparison is an exact tie.
        let set = DataSet::from_text("A Y\n1 1\n0 1\n1 0\n0 0\n").unwrap();
        let model = NaiveBayes::fit(&set).unwrap();
        assert!(model.classify(&[true]));
        assert!(model.classify(&[false]));
    }

    #[test]
    fn perfectly_correlated_attribute_separates_classes() {
        let model = NaiveBayes::fit(&correlated_dataset()).unwrap();
        // attr_given_false is 0, so the true-attribute false branch is -inf.
        assert!(model.classify(&[true]));
        assert!(!model.classify(&[false]));
    }

    #[test]
    fn xor_counts_are_uninformative() {
        // Every conditional probability of the XOR table is 0.5, so the
        // log-odds always tie and everything classifies as true.
        let model = NaiveBayes::fit(&xor_dataset()).unwrap();
        for observation in xor_dataset().observations() {
            assert!(model.classify(observation));
        }
    }

    #[test]
    fn report_matches_hand_computed_probabilities() {
        let model = NaiveBayes::fit(&skewed_dataset()).unwrap();
        let [false_line, true_line] = model.probability_report();
        assert_eq!(
            false_line,
            "P(Y=0)=0.60 P(A=0|0)=0.67 P(A=1|0)=0.33 P(B=0|0)=0.67 P(B=1|0)=0.33 "
        );
        assert_eq!(
            true_line,
            "P(Y=1)=0.40 P(A=0|1)=0.00 P(A=1|1)=1.00 P(B=0|1)=0.50 P(B=1|1)=0.50 "
        );
    }

    #[test]
    fn report_lists_false_class_first() {
        let model = NaiveBayes::fit(&correlated_dataset()).unwrap();
        let [first, second] = model.probability_report();
        assert!(first.starts_with("P(Y=0)="));
        assert!(second.starts_with("P(Y=1)="));
    }
}
