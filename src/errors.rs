use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    #[error("Duplicate company id: {0}")]
    DuplicateCompany(String),

    #[error("Unresolved parent id {parent_id} referenced by {child}")]
    UnresolvedParent { child: String, parent_id: String },

    #[error("No root company found (every row declares a parent)")]
    MissingRoot,

    #[error("Multiple root companies found: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),

    #[error("Missing column {column} in {table} row {row}")]
    MissingColumn {
        table: &'static str,
        column: usize,
        row: usize,
    },

    #[error("Failed to parse input table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal tree operation failed: {0}")]
    Internal(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
