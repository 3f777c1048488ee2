//! Leaf members of a declaration.
//!
//! - [`AnnotationSpec`] - `@Type(...)` annotations
//! - [`TypeVariable`] - generic type parameters
//! - [`PropertySpec`] - fields
//! - [`ParameterSpec`] - function parameters
//! - [`FunctionSpec`] - methods and constructors
//!
//! Each member renders itself through the [`CodeWriter`](crate::CodeWriter).

mod annotation;
mod function;
mod parameter;
mod property;
mod type_variable;

pub use annotation::AnnotationSpec;
pub use function::{FunctionBuilder, FunctionSpec};
pub use parameter::{ParameterBuilder, ParameterSpec};
pub use property::{PropertyBuilder, PropertySpec};
pub use type_variable::TypeVariable;
