mod dataset;
mod error;

pub use dataset::DataSet;
pub use error::DataSetError;
