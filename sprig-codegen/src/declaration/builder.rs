use sprig_core::{Modifier, ModifierSet, is_valid_name};

use super::{Declaration, DeclarationKind};
use crate::{
    AnnotationSpec, Arg, CodeBlock, Error, FunctionSpec, PropertySpec, Result, Rule, TypeName,
    TypeVariable,
};

/// Builder for [`Declaration`].
///
/// Each `add_*` call checks the rules that apply to the member being added
/// and fails fast. [`build`](Self::build) checks the rules that span the
/// whole declaration.
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    declaration: Declaration,
}

impl DeclarationBuilder {
    pub(super) fn new(declaration: Declaration) -> Self {
        Self { declaration }
    }

    pub fn kind(&self) -> DeclarationKind {
        self.declaration.kind
    }

    fn label(&self) -> &str {
        self.declaration.name.as_deref().unwrap_or("anonymous class")
    }

    // =========================================================================
    // Header
    // =========================================================================

    /// Append to the doc comment.
    pub fn add_doc(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        self.declaration.doc = self.declaration.doc.to_builder().add(format, args)?.build();
        Ok(self)
    }

    /// Append a prepared block to the doc comment.
    pub fn add_doc_block(mut self, block: CodeBlock) -> Self {
        self.declaration.doc = self.declaration.doc.to_builder().add_code(block).build();
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.declaration.annotations.push(annotation);
        self
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Result<Self> {
        if self.declaration.is_anonymous() {
            return Err(Error::violation(
                Rule::AnonymousModifiers,
                "anonymous classes cannot declare modifiers",
            ));
        }
        self.declaration.modifiers.extend(modifiers);
        Ok(self)
    }

    pub fn add_type_parameter(mut self, variable: TypeVariable) -> Result<Self> {
        if self.declaration.is_anonymous() {
            return Err(Error::violation(
                Rule::AnonymousTypeParameters,
                "anonymous classes cannot declare type parameters",
            ));
        }
        self.declaration.type_parameters.push(variable);
        Ok(self)
    }

    /// Set the superclass. Only classes have one, and it is set at most once.
    pub fn superclass(mut self, ty: impl Into<TypeName>) -> Result<Self> {
        let ty = ty.into();
        if self.declaration.kind != DeclarationKind::Class {
            return Err(Error::violation(
                Rule::Superclass,
                format!("only classes have superclasses, not {}", self.label()),
            ));
        }
        if !self.declaration.superclass.is_object() {
            return Err(Error::violation(
                Rule::Superclass,
                format!("superclass already set for {}", self.label()),
            ));
        }
        if ty.is_primitive() {
            return Err(Error::violation(
                Rule::Supertype,
                format!("superclass of {} must be a reference type", self.label()),
            ));
        }
        self.declaration.superclass = ty;
        Ok(self)
    }

    pub fn add_superinterface(mut self, ty: impl Into<TypeName>) -> Result<Self> {
        let ty = ty.into();
        if ty.is_primitive() {
            return Err(Error::violation(
                Rule::Supertype,
                format!("superinterface of {} must be a reference type", self.label()),
            ));
        }
        self.declaration.superinterfaces.push(ty);
        Ok(self)
    }

    // =========================================================================
    // Body
    // =========================================================================

    /// Add an enum constant without a body.
    pub fn add_enum_constant(self, name: impl Into<String>) -> Result<Self> {
        let body = Declaration::anonymous_builder(CodeBlock::default()).build()?;
        self.add_enum_constant_with_body(name, body)
    }

    /// Add an enum constant whose arguments and members come from `body`,
    /// which must be an anonymous declaration.
    pub fn add_enum_constant_with_body(
        mut self,
        name: impl Into<String>,
        body: Declaration,
    ) -> Result<Self> {
        let name = name.into();
        if self.declaration.kind != DeclarationKind::Enum {
            return Err(Error::violation(
                Rule::EnumConstantKind,
                format!("{} is not an enum", self.label()),
            ));
        }
        if !is_valid_name(&name) {
            return Err(Error::InvalidName {
                context: "enum constant",
                name,
            });
        }
        if !body.is_anonymous() {
            return Err(Error::violation(
                Rule::EnumConstantBody,
                format!("body of enum constant {name} must be anonymous"),
            ));
        }
        if self.declaration.enum_constants.contains_key(&name) {
            return Err(Error::violation(
                Rule::DuplicateEnumConstant,
                format!("enum constant {name} is already declared in {}", self.label()),
            ));
        }
        self.declaration.enum_constants.insert(name, body);
        Ok(self)
    }

    pub fn add_property(mut self, property: PropertySpec) -> Result<Self> {
        if matches!(
            self.declaration.kind,
            DeclarationKind::Interface | DeclarationKind::Annotation
        ) {
            let modifiers = property.modifiers();
            let required = [Modifier::Static, Modifier::Final];
            if count_of(modifiers, &[Modifier::Public, Modifier::Private]) != 1
                || !required.iter().all(|m| modifiers.contains(m))
            {
                return Err(Error::violation(
                    Rule::PropertyModifiers,
                    format!(
                        "{} {}.{} requires modifiers public or private, static and final",
                        self.declaration.kind,
                        self.label(),
                        property.name()
                    ),
                ));
            }
        }
        self.declaration.properties.push(property);
        Ok(self)
    }

    pub fn add_function(mut self, function: FunctionSpec) -> Result<Self> {
        let kind = self.declaration.kind;
        let function_name = function.name().unwrap_or("<init>").to_string();
        let qualified = format!("{}.{}", self.label(), function_name);

        match kind {
            DeclarationKind::Interface => {
                let modifiers = function.modifiers();
                if count_of(
                    modifiers,
                    &[Modifier::Abstract, Modifier::Static, Modifier::Default],
                ) != 1
                {
                    return Err(Error::violation(
                        Rule::FunctionModifiers,
                        format!("{qualified} requires exactly one of abstract, static or default"),
                    ));
                }
                if count_of(modifiers, &[Modifier::Public, Modifier::Private]) != 1 {
                    return Err(Error::violation(
                        Rule::FunctionModifiers,
                        format!("{qualified} requires exactly one of public or private"),
                    ));
                }
            }
            DeclarationKind::Annotation => {
                if *function.modifiers() != kind.implicit_function_modifiers() {
                    return Err(Error::violation(
                        Rule::FunctionModifiers,
                        format!("annotation member {qualified} must be exactly public abstract"),
                    ));
                }
            }
            DeclarationKind::Class | DeclarationKind::Enum => {}
        }

        if kind != DeclarationKind::Interface && function.has_modifier(Modifier::Default) {
            return Err(Error::violation(
                Rule::DefaultModifier,
                format!("{qualified}: only interface functions can be default"),
            ));
        }

        if kind != DeclarationKind::Annotation && function.default_value().is_some() {
            return Err(Error::violation(
                Rule::DefaultValue,
                format!("{qualified}: only annotation members can have default values"),
            ));
        }

        if function.is_constructor()
            && (!kind.allows_constructors() || self.declaration.is_anonymous())
        {
            return Err(Error::violation(
                Rule::Constructor,
                format!("{} cannot declare a constructor", self.label()),
            ));
        }

        self.declaration.functions.push(function);
        Ok(self)
    }

    /// Add a nested type declaration.
    pub fn add_nested(mut self, nested: Declaration) -> Result<Self> {
        let Some(nested_name) = nested.name() else {
            return Err(Error::violation(
                Rule::NestedName,
                format!("types nested in {} must be named", self.label()),
            ));
        };
        let implicit = self.declaration.kind.implicit_nested_modifiers();
        if !nested.modifiers().is_superset(&implicit) {
            return Err(Error::violation(
                Rule::NestedModifiers,
                format!(
                    "{}.{nested_name} requires modifiers {}",
                    self.label(),
                    join_modifiers(&implicit)
                ),
            ));
        }
        self.declaration.nested.push(nested);
        Ok(self)
    }

    /// Add a `static { ... }` block.
    pub fn add_static_block(mut self, block: CodeBlock) -> Result<Self> {
        self.require_initializers("static")?;
        self.declaration.static_block = self
            .declaration
            .static_block
            .to_builder()
            .begin_control_flow("static", [])?
            .add_code(block)
            .end_control_flow()
            .build();
        Ok(self)
    }

    /// Add an instance initializer `{ ... }` block.
    pub fn add_initializer_block(mut self, block: CodeBlock) -> Result<Self> {
        self.require_initializers("initializer")?;
        self.declaration.initializer_block = self
            .declaration
            .initializer_block
            .to_builder()
            .add("{\n$>", [])?
            .add_code(block)
            .add("$<}\n", [])?
            .build();
        Ok(self)
    }

    fn require_initializers(&self, what: &str) -> Result<()> {
        if self.declaration.kind.allows_initializers() {
            return Ok(());
        }
        Err(Error::violation(
            Rule::InitializerBlock,
            format!(
                "{} {} cannot have a {what} block",
                self.declaration.kind,
                self.label()
            ),
        ))
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Check the declaration-wide rules and produce the declaration.
    pub fn build(self) -> Result<Declaration> {
        match self.validate() {
            Ok(()) => {
                tracing::debug!(
                    kind = %self.declaration.kind,
                    name = self.label(),
                    "built declaration"
                );
                Ok(self.declaration)
            }
            Err(err) => {
                tracing::debug!(
                    kind = %self.declaration.kind,
                    name = self.label(),
                    error = %err,
                    "rejected declaration"
                );
                Err(err)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let declaration = &self.declaration;

        if declaration.name.is_some() == declaration.anonymous_arguments.is_some() {
            return Err(Error::violation(
                Rule::NameOrArguments,
                "a declaration has either a name or anonymous arguments",
            ));
        }

        if declaration.kind == DeclarationKind::Enum && declaration.enum_constants.is_empty() {
            return Err(Error::violation(
                Rule::EnumConstantsRequired,
                format!("at least one enum constant is required for {}", self.label()),
            ));
        }

        let is_abstract = declaration.modifiers.contains(&Modifier::Abstract)
            || declaration.kind.is_abstract_by_kind();
        if !is_abstract {
            if let Some(function) = declaration
                .functions
                .iter()
                .find(|f| f.has_modifier(Modifier::Abstract))
            {
                return Err(Error::violation(
                    Rule::AbstractFunction,
                    format!(
                        "non-abstract {} declares abstract function {}",
                        self.label(),
                        function.name().unwrap_or("<init>")
                    ),
                ));
            }
        }

        if declaration.is_anonymous() {
            let supertypes = usize::from(!declaration.superclass.is_object())
                + declaration.superinterfaces.len();
            if supertypes > 1 {
                return Err(Error::violation(
                    Rule::AnonymousSupertypes,
                    "anonymous classes have at most one superclass or superinterface",
                ));
            }
        }

        Ok(())
    }
}

fn count_of(modifiers: &ModifierSet, candidates: &[Modifier]) -> usize {
    candidates.iter().filter(|m| modifiers.contains(*m)).count()
}

fn join_modifiers(modifiers: &ModifierSet) -> String {
    modifiers
        .iter()
        .map(Modifier::keyword)
        .collect::<Vec<_>>()
        .join(" ")
}
