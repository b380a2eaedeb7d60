// src/error.rs
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while validating requests or writing datasets
#[derive(Debug)]
pub enum SimError {
    /// Target constraints that cannot describe any dataset
    InvalidTarget {
        n50: usize,
        total_length: usize,
        num_seqs: usize,
    },
    /// A `min..=max` pair where min is zero or exceeds max
    InvalidRange {
        what: &'static str,
        min: usize,
        max: usize,
    },
    /// N50 is undefined for an empty length set
    EmptyLengths,
    /// The summed lengths do not fit in a `usize`
    LengthOverflow,
    InvalidReadSpec(String),
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl SimError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SimError::Io {
            path: path.into(),
            source,
        }
    }

    /// Usage errors are the caller's fault and are never retried
    pub fn is_usage(&self) -> bool {
        !matches!(self, SimError::Io { .. })
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidTarget {
                n50,
                total_length,
                num_seqs,
            } => write!(
                f,
                "invalid target: N50 ({}) must be >= 1 and <= total length ({}), and the sequence count ({}) must be >= 1",
                n50, total_length, num_seqs
            ),
            SimError::InvalidRange { what, min, max } => write!(
                f,
                "invalid {} range {}..={}: values must be positive and min <= max",
                what, min, max
            ),
            SimError::EmptyLengths => write!(f, "cannot compute N50 of an empty length set"),
            SimError::LengthOverflow => write!(f, "total length of the length set overflows"),
            SimError::InvalidReadSpec(spec) => {
                write!(f, "invalid COUNT*SIZE specification: {}", spec)
            }
            SimError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        assert!(SimError::EmptyLengths.is_usage());
        assert!(SimError::LengthOverflow.is_usage());
        assert!(SimError::InvalidReadSpec("x".into()).is_usage());
        let io_err = SimError::io("out.fa", io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(!io_err.is_usage());
        assert_eq!(io_err.to_string(), "out.fa: disk full");
    }
}
