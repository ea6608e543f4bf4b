use std::fmt;

#[derive(Debug)]
pub enum DataSetError {
    EmptyInput { source: String },

    ShapeMismatch { source: String, detail: String },

    Io(std::io::Error),
}

impl fmt::Display for DataSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSetError::EmptyInput { source } => write!(
                f,
                "no header line found in {source}: the input is empty or all blank"
            ),
            DataSetError::ShapeMismatch { source, detail } => {
                write!(f, "shape mismatch in {source}: {detail}")
            }
            DataSetError::Io(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for DataSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataSetError::Io(err) => err.source(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataSetError {
    fn from(err: std::io::Error) -> Self {
        DataSetError::Io(err)
    }
}
