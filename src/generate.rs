//! Recursive value-to-literal translation.
//!
//! The generator walks a [`Value`] tree and emits Go literal text,
//! threading an [`ImportSet`] through every recursive call so that struct
//! values owned by foreign packages register the imports the emitted text
//! depends on.

use crate::diagnostics::GenerateError;
use crate::imports::ImportSet;
use crate::package;
use crate::value::{MapValue, SliceValue, StructValue, Value};

/// Translates runtime values into Go source literals.
///
/// The local package is captured at construction, so generators with
/// different local packages can run independently in one process.
#[derive(Debug, Clone)]
pub struct Generator {
    package: String,
}

impl Generator {
    /// A generator that treats `package` as local (unqualified).
    pub fn new(package: impl Into<String>) -> Self {
        Self { package: package.into() }
    }

    /// A generator seeded from the process-wide default package
    /// (`GOPACKAGE`, falling back to `main`).
    pub fn from_env() -> Self {
        Self::new(package::default_package())
    }

    /// The package this generator treats as local.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Translate `value` into literal text, accumulating required imports
    /// into `imports`.
    ///
    /// On error the literal is lost but `imports` keeps any entries added
    /// by values processed before the failure; discard both together.
    pub fn generate(&self, value: &Value, imports: &mut ImportSet) -> Result<String, GenerateError> {
        match value {
            Value::Invalid => Err(GenerateError::InvalidValue),
            Value::Str(s) => Ok(quote(s)),
            Value::Int(n) => Ok(n.to_string()),
            Value::Uint(n) => Ok(n.to_string()),
            Value::Struct(s) => self.struct_literal(s, imports),
            Value::Slice(s) => self.slice_literal(s, imports),
            Value::Map(m) => self.map_literal(m, imports),
            Value::Pointer(referent) => self.pointer_literal(referent.as_deref(), imports),
            Value::Func { is_nil: true } => Ok("nil".to_string()),
            Value::Func { is_nil: false } => Err(GenerateError::UnsupportedFunc),
            Value::Scalar(s) => Ok(s.to_string()),
        }
    }

    fn struct_literal(&self, s: &StructValue, imports: &mut ImportSet) -> Result<String, GenerateError> {
        let name = self.qualified_name(s, imports);

        let mut result = format!("{name}{{\n");
        for (field_name, field_value) in &s.fields {
            let field_literal = self.generate(field_value, imports)?;
            result.push_str(&format!("    {field_name}: {field_literal},\n"));
        }
        result.push('}');
        Ok(result)
    }

    fn slice_literal(&self, s: &SliceValue, imports: &mut ImportSet) -> Result<String, GenerateError> {
        let mut elements = Vec::with_capacity(s.elements.len());
        for element in &s.elements {
            elements.push(self.generate(element, imports)?);
        }
        Ok(format!("[]{}{{{}}}", s.elem_type, elements.join(", ")))
    }

    fn map_literal(&self, m: &MapValue, imports: &mut ImportSet) -> Result<String, GenerateError> {
        let mut entries = Vec::with_capacity(m.entries.len());
        for (key, value) in &m.entries {
            let key_literal = self.generate(key, imports)?;
            let value_literal = self.generate(value, imports)?;
            entries.push(format!("{key_literal}: {value_literal}"));
        }
        Ok(format!("map[{}]{}{{{}}}", m.key_type, m.elem_type, entries.join(", ")))
    }

    fn pointer_literal(
        &self,
        referent: Option<&Value>,
        imports: &mut ImportSet,
    ) -> Result<String, GenerateError> {
        match referent {
            None => Ok("nil".to_string()),
            Some(value) => Ok(format!("&{}", self.generate(value, imports)?)),
        }
    }

    /// Decide the emitted type name for a struct value.
    ///
    /// Locally defined structs (empty package, or owned by this
    /// generator's package) keep their bare name. Anything else is spelled
    /// `<last path segment>.<Name>` and its full import path is recorded.
    fn qualified_name(&self, s: &StructValue, imports: &mut ImportSet) -> String {
        if s.package.is_empty() || s.package == self.package {
            return s.name.clone();
        }

        let segment = match s.package.rsplit('/').next() {
            Some(segment) => segment,
            None => s.package.as_str(),
        };
        imports.insert(s.package.clone());
        format!("{segment}.{}", s.name)
    }
}

/// Translate `value` with the process-default local package.
///
/// Equivalent to `Generator::from_env().generate(value, imports)`; this is
/// the entry point for the common one-shot case.
pub fn generate_literal(value: &Value, imports: &mut ImportSet) -> Result<String, GenerateError> {
    Generator::from_env().generate(value, imports)
}

/// Quote a string as a Go interpreted string literal.
///
/// Standard short escapes for the usual control characters, `\xNN` for
/// other ASCII control bytes, `\u`/`\U` forms for non-ASCII control code
/// points. Printable text, including non-ASCII, passes through unchanged.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            c if c.is_control() => {
                let cp = c as u32;
                if cp < 0x80 {
                    out.push_str(&format!("\\x{cp:02x}"));
                } else if cp <= 0xffff {
                    out.push_str(&format!("\\u{cp:04x}"));
                } else {
                    out.push_str(&format!("\\U{cp:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
