//! Declarative source generation for Java-style type declarations.
//!
//! Declarations are assembled with builders that reject structurally
//! invalid combinations, then rendered to formatted source text.
//!
//! # Module Organization
//!
//! - [`declaration`] - The [`Declaration`] tree, its builder and emitter
//! - [`member`] - Properties, functions, parameters, annotations, type variables
//! - [`code`] - `$`-placeholder code templates ([`CodeBlock`])
//! - [`types`] - Type names ([`TypeName`], [`ClassName`])
//! - [`writer`] - The indentation-aware [`CodeWriter`]

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod code;
pub mod declaration;
mod error;
pub mod member;
pub mod types;
pub mod writer;

pub use code::{Arg, CodeBlock, CodeBlockBuilder};
pub use declaration::{Declaration, DeclarationBuilder, DeclarationKind};
pub use error::{EmitError, Error, Result, Rule};
pub use member::{
    AnnotationSpec, FunctionBuilder, FunctionSpec, ParameterBuilder, ParameterSpec,
    PropertyBuilder, PropertySpec, TypeVariable,
};
pub use sprig_core::{Indent, Modifier, ModifierSet, RenderConfig};
pub use types::{ClassName, PrimitiveType, TypeName};
pub use writer::CodeWriter;
