pub mod classifiers;
pub mod core;
pub mod evaluation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
