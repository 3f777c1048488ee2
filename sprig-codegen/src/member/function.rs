use sprig_core::{Modifier, ModifierSet, is_valid_name};

use crate::{
    AnnotationSpec, Arg, CodeBlock, CodeBlockBuilder, CodeWriter, EmitError, Error, ParameterSpec,
    Result, Rule, TypeName, TypeVariable,
};

/// A method or constructor.
///
/// Constructors have no name of their own; they take the name of the
/// declaration they are emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    name: Option<String>,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
    type_parameters: Vec<TypeVariable>,
    return_type: TypeName,
    parameters: Vec<ParameterSpec>,
    varargs: bool,
    exceptions: Vec<TypeName>,
    code: CodeBlock,
    default_value: Option<CodeBlock>,
}

impl FunctionSpec {
    /// Start building a method.
    pub fn builder(name: impl Into<String>) -> FunctionBuilder {
        FunctionBuilder::new(Some(name.into()))
    }

    /// Start building a constructor.
    pub fn constructor_builder() -> FunctionBuilder {
        FunctionBuilder::new(None)
    }

    /// The method name, or `None` for a constructor.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_constructor(&self) -> bool {
        self.name.is_none()
    }

    pub fn doc(&self) -> &CodeBlock {
        &self.doc
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn is_varargs(&self) -> bool {
        self.varargs
    }

    pub fn exceptions(&self) -> &[TypeName] {
        &self.exceptions
    }

    pub fn code(&self) -> &CodeBlock {
        &self.code
    }

    pub fn default_value(&self) -> Option<&CodeBlock> {
        self.default_value.as_ref()
    }

    /// Continue building from this function.
    pub fn to_builder(&self) -> FunctionBuilder {
        FunctionBuilder {
            name: self.name.clone(),
            doc: self.doc.to_builder(),
            annotations: self.annotations.clone(),
            modifiers: self.modifiers.clone(),
            type_parameters: self.type_parameters.clone(),
            return_type: self.return_type.clone(),
            parameters: self.parameters.clone(),
            varargs: self.varargs,
            exceptions: self.exceptions.clone(),
            code: self.code.to_builder(),
            default_value: self.default_value.clone(),
        }
    }

    /// Render the function. `enclosing_name` names constructors.
    pub fn emit(
        &self,
        writer: &mut CodeWriter,
        enclosing_name: Option<&str>,
    ) -> std::result::Result<(), EmitError> {
        writer.emit_doc(&self.doc)?;
        writer.emit_annotations(&self.annotations, false)?;
        writer.emit_modifiers(&self.modifiers, &ModifierSet::new());

        if !self.type_parameters.is_empty() {
            writer.emit_type_parameters(&self.type_parameters).write(" ");
        }

        match &self.name {
            Some(name) => {
                writer.emit_type(&self.return_type).write(" ").write(name);
            }
            None => {
                let name = enclosing_name.ok_or(EmitError::UnnamedConstructor)?;
                writer.write(name);
            }
        }

        writer.write("(");
        let last = self.parameters.len().saturating_sub(1);
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                writer.write(", ");
            }
            parameter.emit(writer, self.varargs && i == last)?;
        }
        writer.write(")");

        if let Some(value) = self.default_value.as_ref().filter(|v| !v.is_empty()) {
            writer.write(" default ");
            writer.emit_code(value)?;
        }

        for (i, exception) in self.exceptions.iter().enumerate() {
            writer.write(if i == 0 { " throws " } else { ", " });
            writer.emit_type(exception);
        }

        if self.has_modifier(Modifier::Abstract) {
            writer.write(";\n");
        } else if self.has_modifier(Modifier::Native) {
            writer.emit_code(&self.code)?;
            writer.write(";\n");
        } else {
            writer.write(" {\n");
            writer.indent();
            if !self.code.is_empty() {
                writer.emit_block(&self.code)?;
            }
            writer.unindent()?;
            writer.write("}\n");
        }
        Ok(())
    }
}

/// Builder for [`FunctionSpec`].
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    name: Option<String>,
    doc: CodeBlockBuilder,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
    type_parameters: Vec<TypeVariable>,
    return_type: TypeName,
    parameters: Vec<ParameterSpec>,
    varargs: bool,
    exceptions: Vec<TypeName>,
    code: CodeBlockBuilder,
    default_value: Option<CodeBlock>,
}

impl FunctionBuilder {
    fn new(name: Option<String>) -> Self {
        Self {
            name,
            doc: CodeBlock::builder(),
            annotations: Vec::new(),
            modifiers: ModifierSet::new(),
            type_parameters: Vec::new(),
            return_type: TypeName::Void,
            parameters: Vec::new(),
            varargs: false,
            exceptions: Vec::new(),
            code: CodeBlock::builder(),
            default_value: None,
        }
    }

    /// Append to the doc comment.
    pub fn doc(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        self.doc = self.doc.add(format, args)?;
        Ok(self)
    }

    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn type_parameter(mut self, variable: TypeVariable) -> Self {
        self.type_parameters.push(variable);
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeName>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Mark the last parameter as variable arity.
    pub fn varargs(mut self, varargs: bool) -> Self {
        self.varargs = varargs;
        self
    }

    pub fn exception(mut self, ty: impl Into<TypeName>) -> Self {
        self.exceptions.push(ty.into());
        self
    }

    /// Set the default value of an annotation member.
    pub fn default_value(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.default_value = Some(CodeBlock::of(format, args)?);
        Ok(self)
    }

    pub fn add_code(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        self.code = self.code.add(format, args)?;
        Ok(self)
    }

    pub fn add_statement(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.code = self.code.add_statement(format, args)?;
        Ok(self)
    }

    pub fn begin_control_flow(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.code = self.code.begin_control_flow(format, args)?;
        Ok(self)
    }

    pub fn next_control_flow(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.code = self.code.next_control_flow(format, args)?;
        Ok(self)
    }

    pub fn end_control_flow(mut self) -> Self {
        self.code = self.code.end_control_flow();
        self
    }

    /// Append a prepared block to the body.
    pub fn code(mut self, block: CodeBlock) -> Self {
        self.code = self.code.add_code(block);
        self
    }

    pub fn build(self) -> Result<FunctionSpec> {
        let label = self.name.as_deref().unwrap_or("constructor").to_string();

        if let Some(name) = &self.name {
            if !is_valid_name(name) {
                return Err(Error::InvalidName {
                    context: "function",
                    name: name.clone(),
                });
            }
        }

        if self.modifiers.contains(&Modifier::Abstract) && !self.code.is_empty() {
            return Err(Error::violation(
                Rule::AbstractBody,
                format!("abstract function {label} cannot have a body"),
            ));
        }

        if self.varargs
            && self
                .parameters
                .last()
                .and_then(|p| p.ty().array_component())
                .is_none()
        {
            return Err(Error::violation(
                Rule::Varargs,
                format!("last parameter of varargs function {label} must be an array"),
            ));
        }

        Ok(FunctionSpec {
            name: self.name,
            doc: self.doc.build(),
            annotations: self.annotations,
            modifiers: self.modifiers,
            type_parameters: self.type_parameters,
            return_type: self.return_type,
            parameters: self.parameters,
            varargs: self.varargs,
            exceptions: self.exceptions,
            code: self.code.build(),
            default_value: self.default_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassName, PrimitiveType};

    fn render(function: &FunctionSpec, enclosing: Option<&str>) -> String {
        let mut writer = CodeWriter::default();
        function.emit(&mut writer, enclosing).unwrap();
        writer.build()
    }

    #[test]
    fn test_method_with_body() {
        let function = FunctionSpec::builder("greet")
            .modifier(Modifier::Public)
            .returns(TypeName::class("java.lang", "String"))
            .parameter(ParameterSpec::of(TypeName::class("java.lang", "String"), "name").unwrap())
            .add_statement("return $S + name", [Arg::string("Hello, ")])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            render(&function, None),
            "public String greet(String name) {\n  return \"Hello, \" + name;\n}\n"
        );
    }

    #[test]
    fn test_empty_body() {
        let function = FunctionSpec::builder("noop").build().unwrap();
        assert_eq!(render(&function, None), "void noop() {\n}\n");
    }

    #[test]
    fn test_abstract_method() {
        let function = FunctionSpec::builder("run")
            .modifiers([Modifier::Abstract, Modifier::Public])
            .exception(TypeName::class("java.io", "IOException"))
            .build()
            .unwrap();
        assert_eq!(
            render(&function, None),
            "public abstract void run() throws java.io.IOException;\n"
        );
    }

    #[test]
    fn test_constructor_takes_enclosing_name() {
        let function = FunctionSpec::constructor_builder()
            .modifier(Modifier::Public)
            .parameter(ParameterSpec::of(PrimitiveType::Int, "size").unwrap())
            .add_statement("this.size = size", [])
            .unwrap()
            .build()
            .unwrap();
        assert!(function.is_constructor());
        assert_eq!(
            render(&function, Some("Box")),
            "public Box(int size) {\n  this.size = size;\n}\n"
        );

        let mut writer = CodeWriter::default();
        assert_eq!(
            function.emit(&mut writer, None),
            Err(EmitError::UnnamedConstructor)
        );
    }

    #[test]
    fn test_generic_varargs_method() {
        let function = FunctionSpec::builder("of")
            .modifiers([Modifier::Public, Modifier::Static])
            .type_parameter(TypeVariable::new("T"))
            .returns(TypeName::parameterized(
                ClassName::new("java.util", "List"),
                [TypeName::variable("T")],
            ))
            .parameter(ParameterSpec::of(TypeName::array(TypeName::variable("T")), "items").unwrap())
            .varargs(true)
            .add_statement("return $T.asList(items)", [Arg::ty(ClassName::new("java.util", "Arrays"))])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            render(&function, None),
            "public static <T> java.util.List<T> of(T... items) {\n  return java.util.Arrays.asList(items);\n}\n"
        );
    }

    #[test]
    fn test_annotation_default_value() {
        let function = FunctionSpec::builder("timeout")
            .modifiers([Modifier::Public, Modifier::Abstract])
            .returns(PrimitiveType::Int)
            .default_value("$L", [Arg::literal(30)])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            render(&function, None),
            "public abstract int timeout() default 30;\n"
        );
    }

    #[test]
    fn test_abstract_with_body_fails() {
        let err = FunctionSpec::builder("run")
            .modifier(Modifier::Abstract)
            .add_statement("go()", [])
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::AbstractBody));
    }

    #[test]
    fn test_varargs_requires_array() {
        let err = FunctionSpec::builder("sum")
            .parameter(ParameterSpec::of(PrimitiveType::Int, "values").unwrap())
            .varargs(true)
            .build()
            .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::Varargs));
    }
}
