use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid value `{token}`: {source}")]
    InvalidValue {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("empty value in argument `{argument}`")]
    EmptyValue { argument: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
