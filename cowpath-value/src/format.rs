//! JSON-like rendering of values.

use core::fmt::{self, Write};

use crate::Value;

/// Format a Value as indented JSON-like text.
///
/// Empty containers are written as `[]` and `{}`; everything else puts one
/// element per line, indented by two spaces per level.
pub fn format_value(value: &Value) -> String {
    let mut ctx = FormatContext {
        output: String::new(),
        indent: 0,
    };
    ctx.format(value);
    ctx.output
}

/// Write `s` as a quoted JSON string.
pub(crate) fn write_escaped(out: &mut impl Write, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c.is_control() => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

struct FormatContext {
    output: String,
    indent: usize,
}

impl FormatContext {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    fn format(&mut self, value: &Value) {
        match value {
            Value::Array(arr) if !arr.is_empty() => {
                self.output.push_str("[\n");
                self.indent += 1;
                for (i, item) in arr.iter().enumerate() {
                    self.write_indent();
                    self.format(item);
                    if i < arr.len() - 1 {
                        self.output.push(',');
                    }
                    self.output.push('\n');
                }
                self.indent -= 1;
                self.write_indent();
                self.output.push(']');
            }
            Value::Object(obj) if !obj.is_empty() => {
                self.output.push_str("{\n");
                self.indent += 1;
                for (i, (key, val)) in obj.iter().enumerate() {
                    self.write_indent();
                    let _ = write_escaped(&mut self.output, key);
                    self.output.push_str(": ");
                    self.format(val);
                    if i < obj.len() - 1 {
                        self.output.push(',');
                    }
                    self.output.push('\n');
                }
                self.indent -= 1;
                self.write_indent();
                self.output.push('}');
            }
            // Scalars and empty containers render the same as `Display`.
            other => {
                let _ = write!(self.output, "{other}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_format_primitives() {
        assert_eq!(format_value(&Value::NULL), "null");
        assert_eq!(format_value(&Value::TRUE), "true");
        assert_eq!(format_value(&Value::from(42i64)), "42");
        assert_eq!(format_value(&Value::from("tab\there")), "\"tab\\there\"");
        assert_eq!(format_value(&value!([])), "[]");
        assert_eq!(format_value(&value!({})), "{}");
    }

    #[test]
    fn test_format_nested() {
        let v = value!({ "point": { "x": 10, "y": [1, 2] }, "tags": [] });
        insta::assert_snapshot!(format_value(&v), @r#"
        {
          "point": {
            "x": 10,
            "y": [
              1,
              2
            ]
          },
          "tags": []
        }
        "#);
    }
}
