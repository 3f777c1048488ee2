//! Conversion of manifest tables into declarations.
//!
//! Every declaration goes through [`DeclarationBuilder`], so a manifest is
//! held to the same rules as code that builds declarations directly. Errors
//! are reported with the dotted manifest path of the offending entry.

use sprig_codegen::{
    AnnotationSpec, Arg, ClassName, CodeBlock, Declaration, DeclarationBuilder, DeclarationKind,
    FunctionSpec, ParameterSpec, PropertySpec, TypeName, TypeVariable,
};

use crate::{
    Result,
    context::ParseContext,
    model::{
        AnnotationDef, DeclarationDef, EnumConstantDef, FunctionDef, ParameterDef, PropertyDef,
        TypeParameterDef,
    },
};

type Built<T> = sprig_codegen::Result<T>;

/// Build one declaration and everything nested in it.
pub(crate) fn declaration(def: &DeclarationDef, ctx: &ParseContext<'_>) -> Result<Declaration> {
    let at = |e: sprig_codegen::Error| ctx.error(&def.name, e);

    let mut builder = match def.kind {
        DeclarationKind::Class => Declaration::class_builder(&def.name),
        DeclarationKind::Interface => Declaration::interface_builder(&def.name),
        DeclarationKind::Enum => Declaration::enum_builder(&def.name),
        DeclarationKind::Annotation => Declaration::annotation_builder(&def.name),
    }
    .map_err(at)?;

    if let Some(doc) = &def.doc {
        builder = builder.add_doc("$L", [Arg::literal(doc)]).map_err(at)?;
    }
    for (i, annotation_def) in def.annotations.iter().enumerate() {
        let spec = annotation(annotation_def)
            .map_err(|e| ctx.index("annotations", i).error(&annotation_def.type_name, e))?;
        builder = builder.add_annotation(spec);
    }
    if !def.modifiers.is_empty() {
        builder = builder
            .add_modifiers(def.modifiers.iter().copied())
            .map_err(at)?;
    }
    for (i, parameter) in def.type_parameters.iter().enumerate() {
        let variable = type_variable(parameter)
            .map_err(|e| ctx.index("type_parameters", i).error(&parameter.name, e))?;
        builder = builder.add_type_parameter(variable).map_err(at)?;
    }

    if let Some(superclass) = &def.superclass {
        let field = ctx.field("superclass");
        builder = TypeName::parse(superclass)
            .and_then(|ty| builder.superclass(ty))
            .map_err(|e| field.error(superclass, e))?;
    }
    for (i, superinterface) in def.superinterfaces.iter().enumerate() {
        let entry = ctx.index("superinterfaces", i);
        builder = TypeName::parse(superinterface)
            .and_then(|ty| builder.add_superinterface(ty))
            .map_err(|e| entry.error(superinterface, e))?;
    }

    builder = members(builder, def, ctx)?;

    for (i, nested_def) in def.nested.iter().enumerate() {
        let nested = declaration(nested_def, &ctx.index("nested", i))?;
        builder = builder
            .add_nested(nested)
            .map_err(|e| ctx.index("nested", i).error(&nested_def.name, e))?;
    }

    if !def.static_block.is_empty() {
        builder = statements(&def.static_block)
            .and_then(|block| builder.add_static_block(block))
            .map_err(|e| ctx.field("static_block").error("", e))?;
    }
    if !def.initializer_block.is_empty() {
        builder = statements(&def.initializer_block)
            .and_then(|block| builder.add_initializer_block(block))
            .map_err(|e| ctx.field("initializer_block").error("", e))?;
    }

    let declaration = builder.build().map_err(at)?;
    tracing::debug!(path = %ctx.path_string(), name = %def.name, "converted declaration");
    Ok(declaration)
}

/// Add enum constants, properties and functions.
fn members(
    mut builder: DeclarationBuilder,
    def: &DeclarationDef,
    ctx: &ParseContext<'_>,
) -> Result<DeclarationBuilder> {
    for (i, constant) in def.enum_constants.iter().enumerate() {
        let entry = ctx.index("enum_constants", i);
        let body = enum_constant_body(constant, &entry)?;
        builder = builder
            .add_enum_constant_with_body(&constant.name, body)
            .map_err(|e| entry.error(&constant.name, e))?;
    }

    for (i, property_def) in def.properties.iter().enumerate() {
        let entry = ctx.index("properties", i);
        builder = property(property_def)
            .and_then(|spec| builder.add_property(spec))
            .map_err(|e| entry.error(&property_def.name, e))?;
    }

    for (i, function_def) in def.functions.iter().enumerate() {
        let entry = ctx.index("functions", i);
        builder = function(function_def)
            .and_then(|spec| builder.add_function(spec))
            .map_err(|e| entry.error(function_def.name.as_deref().unwrap_or_default(), e))?;
    }

    Ok(builder)
}

fn enum_constant_body(def: &EnumConstantDef, ctx: &ParseContext<'_>) -> Result<Declaration> {
    let at = |e: sprig_codegen::Error| ctx.error(&def.name, e);

    let arguments = match &def.arguments {
        Some(arguments) => code(arguments).map_err(at)?,
        None => CodeBlock::default(),
    };
    let mut body = Declaration::anonymous_builder(arguments);
    if let Some(doc) = &def.doc {
        body = body.add_doc("$L", [Arg::literal(doc)]).map_err(at)?;
    }

    for (i, property_def) in def.properties.iter().enumerate() {
        let entry = ctx.index("properties", i);
        body = property(property_def)
            .and_then(|spec| body.add_property(spec))
            .map_err(|e| entry.error(&property_def.name, e))?;
    }
    for (i, function_def) in def.functions.iter().enumerate() {
        let entry = ctx.index("functions", i);
        body = function(function_def)
            .and_then(|spec| body.add_function(spec))
            .map_err(|e| entry.error(function_def.name.as_deref().unwrap_or_default(), e))?;
    }

    body.build().map_err(at)
}

fn property(def: &PropertyDef) -> Built<PropertySpec> {
    let mut builder = PropertySpec::builder(TypeName::parse(&def.type_name)?, &def.name)
        .modifiers(def.modifiers.iter().copied());
    if let Some(doc) = &def.doc {
        builder = builder.doc("$L", [Arg::literal(doc)])?;
    }
    for annotation_def in &def.annotations {
        builder = builder.annotation(annotation(annotation_def)?);
    }
    if let Some(initializer) = &def.initializer {
        builder = builder.initializer_block(code(initializer)?);
    }
    builder.build()
}

fn function(def: &FunctionDef) -> Built<FunctionSpec> {
    let mut builder = match &def.name {
        Some(name) => FunctionSpec::builder(name),
        None => FunctionSpec::constructor_builder(),
    }
    .modifiers(def.modifiers.iter().copied())
    .varargs(def.varargs);

    if let Some(doc) = &def.doc {
        builder = builder.doc("$L", [Arg::literal(doc)])?;
    }
    for annotation_def in &def.annotations {
        builder = builder.annotation(annotation(annotation_def)?);
    }
    for parameter in &def.type_parameters {
        builder = builder.type_parameter(type_variable(parameter)?);
    }
    if let Some(returns) = &def.returns {
        builder = builder.returns(TypeName::parse(returns)?);
    }
    for parameter_def in &def.parameters {
        builder = builder.parameter(parameter(parameter_def)?);
    }
    for exception in &def.throws {
        builder = builder.exception(TypeName::parse(exception)?);
    }
    for statement in &def.body {
        builder = builder.add_statement("$L", [Arg::literal(statement)])?;
    }
    if let Some(default) = &def.default {
        builder = builder.default_value("$L", [Arg::literal(default)])?;
    }
    builder.build()
}

fn parameter(def: &ParameterDef) -> Built<ParameterSpec> {
    let mut builder = ParameterSpec::builder(TypeName::parse(&def.type_name)?, &def.name);
    for modifier in &def.modifiers {
        builder = builder.modifier(*modifier);
    }
    for annotation_def in &def.annotations {
        builder = builder.annotation(annotation(annotation_def)?);
    }
    builder.build()
}

fn annotation(def: &AnnotationDef) -> Built<AnnotationSpec> {
    let class = ClassName::best_guess(&def.type_name).ok_or_else(|| {
        sprig_codegen::Error::InvalidType {
            input: def.type_name.clone(),
            message: "annotations must name a class".into(),
        }
    })?;
    let mut spec = AnnotationSpec::new(class);
    for (name, values) in &def.members {
        for value in values {
            spec = spec.member(name, code(value)?)?;
        }
    }
    Ok(spec)
}

fn type_variable(def: &TypeParameterDef) -> Built<TypeVariable> {
    let mut variable = TypeVariable::new(&def.name);
    for bound in &def.bounds {
        variable = variable.bound(TypeName::parse(bound)?);
    }
    Ok(variable)
}

/// Verbatim source text as a code block.
fn code(text: &str) -> Built<CodeBlock> {
    CodeBlock::of("$L", [Arg::literal(text)])
}

/// One statement per entry.
fn statements(lines: &[String]) -> Built<CodeBlock> {
    let mut builder = CodeBlock::builder();
    for line in lines {
        builder = builder.add_statement("$L", [Arg::literal(line)])?;
    }
    Ok(builder.build())
}
