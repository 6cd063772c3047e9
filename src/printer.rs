use std::borrow::Cow;
use std::io::{self, Write};

use serde_json::Value;
use tracing::trace;

use crate::error::{kind_of, Error, FieldsResult};

/// Look up a top level field in the working value.
pub fn lookup<'a>(value: &'a Value, field: &str) -> FieldsResult<&'a Value> {
    match value {
        Value::Object(map) => map
            .get(field)
            .ok_or_else(|| Error::MissingField(field.to_string())),
        v => Err(Error::NotAnObject {
            field: field.to_string(),
            kind: kind_of(v),
        }),
    }
}

// render returns the text printed for a value. strings lose their quotes,
// everything else is written as compact json.
pub fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        v => Cow::Owned(v.to_string()),
    }
}

/// Write each field's value to `out`, one per line, in the order given.
/// Fields before a failing lookup have already been written when the error
/// is returned.
pub fn write_fields<W, I, S>(value: &Value, fields: I, mut out: W) -> FieldsResult<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for field in fields {
        let field = field.as_ref();
        let v = lookup(value, field)?;
        trace!(field, "printing field");
        writeln!(out, "{}", render(v))?;
    }

    out.flush()?;
    Ok(())
}

/// Print each field's value to stdout.
pub fn print_fields<I, S>(value: &Value, fields: I) -> FieldsResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    write_fields(value, fields, stdout.lock())
}
