//! Freeze in-memory values as Go source literals.
//!
//! Given a [`Value`] describing a piece of runtime data, the generator
//! emits literal text that parses back into a structurally equal value,
//! plus the set of package imports that text depends on.
//!
//! ```
//! use litgen::{Generator, ImportSet, StructValue, Value};
//!
//! let person = Value::Struct(StructValue {
//!     name: "Person".to_string(),
//!     package: "app/models".to_string(),
//!     fields: vec![
//!         ("Name".to_string(), Value::Str("Bob".to_string())),
//!         ("Age".to_string(), Value::Int(30)),
//!     ],
//! });
//!
//! let mut imports = ImportSet::new();
//! let literal = Generator::new("main").generate(&person, &mut imports)?;
//!
//! assert_eq!(literal, "models.Person{\n    Name: \"Bob\",\n    Age: 30,\n}");
//! assert_eq!(imports.generate(), "import (\n\t\"app/models\"\n)");
//! # Ok::<(), litgen::GenerateError>(())
//! ```

pub mod diagnostics;
pub mod generate;
pub mod imports;
pub mod package;
pub mod value;

pub use diagnostics::GenerateError;
pub use generate::{generate_literal, Generator};
pub use imports::ImportSet;
pub use value::{MapValue, ScalarValue, SliceValue, StructValue, Value};
