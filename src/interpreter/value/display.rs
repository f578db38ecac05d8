use std::fmt;

use crate::{interpreter::value::core::Value, util::num::format_number};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Object(properties) => {
                if properties.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (key, value)) in properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, " }}")
            },
            Self::Function(closure) => write!(f, "<function({})>", closure.def.params.join(", ")),
            Self::Builtin(_) => write!(f, "<builtin function>"),
        }
    }
}

/// Renders a value the way `print` and the REPL show it.
///
/// Strings appear without quotes, arrays and objects are rendered
/// recursively, and functions render as opaque placeholders.
///
/// # Example
/// ```
/// use mylang::interpreter::value::{core::Value, display::value_to_string};
///
/// let array = Value::from(vec![Value::Number(1.0), Value::from("a"), Value::Null]);
/// assert_eq!(value_to_string(&array), "[1, a, null]");
/// assert_eq!(value_to_string(&Value::Number(2.5)), "2.5");
/// ```
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    value.to_string()
}
