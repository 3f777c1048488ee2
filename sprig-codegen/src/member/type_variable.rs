use crate::TypeName;

/// A generic type parameter with optional bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    name: String,
    bounds: Vec<TypeName>,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Add an upper bound.
    pub fn bound(mut self, bound: impl Into<TypeName>) -> Self {
        self.bounds.push(bound.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }
}

impl From<&TypeVariable> for TypeName {
    fn from(variable: &TypeVariable) -> Self {
        TypeName::Variable(variable.name.clone())
    }
}
