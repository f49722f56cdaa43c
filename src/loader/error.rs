use std::path::PathBuf;

/// Errors that can occur while loading raw scan files
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// I/O error reading a scan file or listing a session
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The scan file holds no data rows
    #[error("Scan file has no data: {}", .0.display())]
    EmptyFile(PathBuf),

    /// Real and imaginary columns do not pair up
    #[error("Scan file {} has an odd number of columns ({columns})", path.display())]
    OddColumnCount {
        /// Scan file
        path: PathBuf,
        /// Number of columns found
        columns: usize,
    },

    /// A row has a different number of columns than the first row
    #[error("Scan file {} line {line}: expected {expected} columns, found {found}", path.display())]
    RaggedRow {
        /// Scan file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Column count of the first data row
        expected: usize,
        /// Column count of this row
        found: usize,
    },

    /// A token is not a real number
    #[error("Scan file {} line {line}: invalid number '{token}'", path.display())]
    InvalidNumber {
        /// Scan file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// A scan file name does not carry an `expt<NN>` token
    #[error("Cannot read experiment index from file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// A scan file's experiment index has no metadata row in its session
    #[error("File {} is not an experiment of session {}: no metadata row with n_expt = {index}", file.display(), session.display())]
    UnmatchedExperiment {
        /// Scan file
        file: PathBuf,
        /// Session directory
        session: PathBuf,
        /// Experiment index embedded in the file name
        index: i64,
    },

    /// Two scan files, or two metadata rows, claim the same experiment index
    #[error("Experiment {index} of session {} is claimed more than once", session.display())]
    DuplicateExperiment {
        /// Session directory
        session: PathBuf,
        /// Repeated experiment index
        index: i64,
    },

    /// A metadata row has no scan file
    #[error("No scan file for experiment {index:?} of session {}", session.display())]
    MissingExperiment {
        /// Session directory
        session: PathBuf,
        /// Experiment index of the metadata row, if it had one
        index: Option<i64>,
    },
}
