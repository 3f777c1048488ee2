//! `sprig.toml` declaration manifests.
//!
//! A manifest describes a set of declarations in TOML and is turned into
//! [`Declaration`](sprig_codegen::Declaration)s through the same builders
//! library code uses.
//!
//! ```
//! use std::str::FromStr;
//!
//! use sprig_manifest::Manifest;
//!
//! let manifest = Manifest::from_str(
//!     r#"
//!     [[declarations]]
//!     kind = "interface"
//!     name = "Greeter"
//!
//!     [[declarations.functions]]
//!     name = "greet"
//!     modifiers = ["public", "abstract"]
//!     "#,
//! )
//! .unwrap();
//!
//! let declarations = manifest.declarations().unwrap();
//! assert_eq!(
//!     declarations[0].render().unwrap(),
//!     "interface Greeter {\n  public abstract void greet();\n}\n"
//! );
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod convert;
mod error;
mod manifest;
mod model;

pub use error::{Error, Result, SourceContext};
pub use manifest::Manifest;
pub use model::{
    AnnotationDef, DeclarationDef, EnumConstantDef, FunctionDef, ParameterDef, PropertyDef,
    TypeParameterDef,
};
