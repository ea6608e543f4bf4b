use crate::core::DataSet;

/// All eight boolean combinations of three attributes, labeled `A ⊕ B ⊕ C`.
pub const XOR_TABLE: &str = "A B C Y\n\
                             0 0 0 0\n\
                             0 0 1 1\n\
                             0 1 0 1\n\
                             0 1 1 0\n\
                             1 0 0 1\n\
                             1 0 1 0\n\
                             1 1 0 0\n\
                             1 1 1 1\n";

pub fn xor_dataset() -> DataSet {
    DataSet::from_text(XOR_TABLE).expect("XOR fixture must parse")
}

/// Balanced labels with one attribute that perfectly tracks the label.
pub fn correlated_dataset() -> DataSet {
    DataSet::from_text("X Y\n1 1\n1 1\n0 0\n0 0\n").expect("correlated fixture must parse")
}

/// Five rows, three false labels to two true, with easy hand-checked counts:
/// class counts 3/2, `A` given true 2, `B` given true 1, both given false 1.
pub fn skewed_dataset() -> DataSet {
    DataSet::from_text("A B Y\n1 0 1\n1 1 1\n0 0 0\n0 1 0\n1 0 0\n")
        .expect("skewed fixture must parse")
}
