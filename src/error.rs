use std::{fmt, io};

use serde_json::Value;

pub type FieldsResult<T> = Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io {
        path: Option<String>,
        message: String,
    },
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    EmptyArray,
    MissingField(String),
    NotAnObject {
        field: String,
        kind: &'static str,
    },
}

impl Error {
    // attach the path we were reading to an io error, errors that
    // already carry a path are left alone.
    pub fn with_path(self, path: &str) -> Self {
        match self {
            Error::Io {
                path: None,
                message,
            } => Error::Io {
                path: Some(path.to_string()),
                message,
            },
            e => e,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io {
                path: Some(path),
                message,
            } => write!(f, "{}: {}", path, message),
            Error::Io {
                path: None,
                message,
            } => write!(f, "{}", message),
            Error::Parse {
                line,
                column,
                message,
            } => write!(f, "invalid json at line {} column {}: {}", line, column, message),
            Error::EmptyArray => write!(f, "document is an empty array"),
            Error::MissingField(field) => write!(f, "field not found: {}", field),
            Error::NotAnObject { field, kind } => {
                write!(f, "cannot look up field {} in a json {}", field, kind)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io {
            path: None,
            message: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // serde_json reports read failures through its own error type
        if value.is_io() {
            return Error::Io {
                path: None,
                message: value.to_string(),
            };
        }

        Error::Parse {
            line: value.line(),
            column: value.column(),
            message: value.to_string(),
        }
    }
}

// kind_of names the json type of a value for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
