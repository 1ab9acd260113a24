//! Station data error types.

/// Errors that can occur when loading station data.
///
/// Individual malformed rows are *not* errors: they are dropped during
/// the load and only counted. These variants cover failures that make
/// the whole source unusable.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Could not open or read the source file
    #[error("I/O error reading station data: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is unreadable (bad headers, encoding, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StationError::from(io);
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("no such file"));
    }
}
