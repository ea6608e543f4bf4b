mod accuracy;

pub use accuracy::{Accuracy, EvaluationError, evaluate};
