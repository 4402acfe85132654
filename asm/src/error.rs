use thiserror::Error;

/// Per-line assembly failures. Each is contained to the line that raised
/// it; the rest of the program still assembles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("Unknown operation: `{0}`")]
    UnknownOperation(String),

    #[error("More argument required")]
    MissingArgument,

    #[error("Cannot parse `{0}` as {1}")]
    ParseArgument(String, String),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("{0}")]
    FieldRange(String),
}
