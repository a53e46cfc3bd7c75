use thiserror::Error;

/// Domain-specific errors for the timetable engine.
///
/// `InputError` is the only variant that can stop the core from starting
/// (spec.md §7): missing/malformed rows or a dangling reference. Once
/// `build()` succeeds, `EmptyDomain`, `Unsatisfiable`, and `Cancelled` are
/// never surfaced as `Err` — they're encoded in `CspResult` instead, so the
/// core "never throws across its public boundary".
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Instructor-course join references unknown course '{course_id}'")]
    UnknownCourseReference { course_id: String },

    #[error("Duplicate ID found: {id_type} '{id}'")]
    DuplicateId { id_type: String, id: String },

    #[error("Variable id collision: '{var_id}'")]
    VarIdCollision { var_id: String },

    #[error("Propagation solver failed: {0}")]
    SolverFailed(String),
}

/// Use anyhow::Result at the public boundary, matching the rest of the
/// crate's error plumbing.
pub type Result<T> = anyhow::Result<T>;
