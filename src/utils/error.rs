use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardGenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid piece value '{value}' at row {row}, column {column}")]
    PieceParseError {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Board is not rectangular: row {row} has {actual} columns, expected {expected}")]
    JaggedBoardError {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid config value for field '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Csv,
    Board,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardGenError::IoError(_) => ErrorCategory::Io,
            BoardGenError::CsvError(_) => ErrorCategory::Csv,
            BoardGenError::PieceParseError { .. } | BoardGenError::JaggedBoardError { .. } => {
                ErrorCategory::Board
            }
            BoardGenError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoardGenError::IoError(_) => ErrorSeverity::Critical,
            BoardGenError::CsvError(_)
            | BoardGenError::PieceParseError { .. }
            | BoardGenError::JaggedBoardError { .. } => ErrorSeverity::High,
            BoardGenError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BoardGenError::IoError(_) => {
                "Check that the board CSV exists and is readable".to_string()
            }
            BoardGenError::CsvError(_) => {
                "Check that the board file is a plain comma-separated CSV".to_string()
            }
            BoardGenError::PieceParseError { .. } => {
                "Every cell in the board CSV must be a whole number".to_string()
            }
            BoardGenError::JaggedBoardError { .. } => {
                "Every row in the board CSV must have the same number of columns".to_string()
            }
            BoardGenError::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoardGenError::IoError(e) => format!("Could not read the board file: {}", e),
            BoardGenError::CsvError(e) => format!("Could not parse the board file: {}", e),
            BoardGenError::PieceParseError { row, column, value } => format!(
                "'{}' at row {}, column {} is not a valid piece value",
                value, row, column
            ),
            BoardGenError::JaggedBoardError {
                row,
                expected,
                actual,
            } => format!(
                "Row {} has {} columns but the board is {} columns wide",
                row, actual, expected
            ),
            BoardGenError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardGenError>;
