//! Construction rules enforced by the declaration builder.

use sprig_codegen::{
    Arg, CodeBlock, Declaration, Error, FunctionSpec, Modifier, PrimitiveType,
    PropertySpec, Rule, TypeName, TypeVariable,
};

fn rule_of<T: std::fmt::Debug>(result: Result<T, Error>) -> Rule {
    result
        .unwrap_err()
        .rule()
        .expect("expected an invariant violation")
}

fn runnable() -> TypeName {
    TypeName::class("java.lang", "Runnable")
}

#[test]
fn test_declaration_names_are_validated() {
    assert_eq!(
        Declaration::class_builder("class").unwrap_err(),
        Error::InvalidName {
            context: "declaration",
            name: "class".into()
        }
    );
    assert!(Declaration::interface_builder("9Lives").is_err());
    assert!(Declaration::enum_builder("has space").is_err());
    assert!(Declaration::annotation_builder("Valid$Name_1").is_ok());
}

#[test]
fn test_enum_requires_constants() {
    let result = Declaration::enum_builder("X").unwrap().build();
    assert_eq!(rule_of(result), Rule::EnumConstantsRequired);
}

#[test]
fn test_enum_constants_only_on_enums() {
    let result = Declaration::class_builder("X")
        .unwrap()
        .add_enum_constant("A");
    assert_eq!(rule_of(result), Rule::EnumConstantKind);
}

#[test]
fn test_duplicate_enum_constant() {
    let result = Declaration::enum_builder("X")
        .unwrap()
        .add_enum_constant("A")
        .unwrap()
        .add_enum_constant("A");
    assert_eq!(rule_of(result), Rule::DuplicateEnumConstant);
}

#[test]
fn test_enum_constant_body_must_be_anonymous() {
    let named = Declaration::class_builder("Body").unwrap().build().unwrap();
    let result = Declaration::enum_builder("X")
        .unwrap()
        .add_enum_constant_with_body("A", named);
    assert_eq!(rule_of(result), Rule::EnumConstantBody);
}

#[test]
fn test_enum_constant_name_is_validated() {
    let err = Declaration::enum_builder("X")
        .unwrap()
        .add_enum_constant("enum")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidName { context: "enum constant", .. }));
}

#[test]
fn test_abstract_function_requires_abstract_declaration() {
    let run = FunctionSpec::builder("run")
        .modifier(Modifier::Abstract)
        .build()
        .unwrap();

    let result = Declaration::class_builder("Task")
        .unwrap()
        .add_function(run.clone())
        .unwrap()
        .build();
    assert_eq!(rule_of(result), Rule::AbstractFunction);

    let abstract_class = Declaration::class_builder("Task")
        .unwrap()
        .add_modifiers([Modifier::Abstract])
        .unwrap()
        .add_function(run.clone())
        .unwrap()
        .build();
    assert!(abstract_class.is_ok());

    let with_enum = Declaration::enum_builder("Op")
        .unwrap()
        .add_enum_constant("ADD")
        .unwrap()
        .add_function(run)
        .unwrap()
        .build();
    assert!(with_enum.is_ok());
}

#[test]
fn test_anonymous_class_with_two_supertypes_fails_at_build() {
    let builder = Declaration::anonymous_builder(CodeBlock::default())
        .superclass(TypeName::class("com.example", "Base"))
        .unwrap()
        .add_superinterface(runnable())
        .unwrap();
    assert_eq!(rule_of(builder.build()), Rule::AnonymousSupertypes);
}

#[test]
fn test_anonymous_class_restrictions() {
    let modifiers = Declaration::anonymous_builder(CodeBlock::default())
        .add_modifiers([Modifier::Public]);
    assert_eq!(rule_of(modifiers), Rule::AnonymousModifiers);

    let type_parameters = Declaration::anonymous_builder(CodeBlock::default())
        .add_type_parameter(TypeVariable::new("T"));
    assert_eq!(rule_of(type_parameters), Rule::AnonymousTypeParameters);

    let constructor = Declaration::anonymous_builder(CodeBlock::default())
        .add_function(FunctionSpec::constructor_builder().build().unwrap());
    assert_eq!(rule_of(constructor), Rule::Constructor);
}

#[test]
fn test_interface_functions_need_exactly_one_kind_modifier() {
    let builder = || Declaration::interface_builder("Service").unwrap();

    let plain = FunctionSpec::builder("run")
        .modifier(Modifier::Public)
        .build()
        .unwrap();
    assert_eq!(rule_of(builder().add_function(plain)), Rule::FunctionModifiers);

    let both = FunctionSpec::builder("run")
        .modifiers([Modifier::Public, Modifier::Abstract, Modifier::Static])
        .build()
        .unwrap();
    assert_eq!(rule_of(builder().add_function(both)), Rule::FunctionModifiers);

    let no_visibility = FunctionSpec::builder("run")
        .modifier(Modifier::Abstract)
        .build()
        .unwrap();
    assert_eq!(
        rule_of(builder().add_function(no_visibility)),
        Rule::FunctionModifiers
    );

    let valid = FunctionSpec::builder("run")
        .modifiers([Modifier::Public, Modifier::Abstract])
        .build()
        .unwrap();
    let service = builder().add_function(valid).unwrap().build().unwrap();
    assert_eq!(
        service.render().unwrap(),
        "interface Service {\n  public abstract void run();\n}\n"
    );
}

#[test]
fn test_interface_properties_are_constants() {
    let builder = || Declaration::interface_builder("Limits").unwrap();

    let missing_final = PropertySpec::builder(PrimitiveType::Int, "MAX")
        .modifiers([Modifier::Public, Modifier::Static])
        .initializer("$L", [Arg::literal(10)])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        rule_of(builder().add_property(missing_final)),
        Rule::PropertyModifiers
    );

    let constant = PropertySpec::builder(PrimitiveType::Int, "MAX")
        .modifiers([Modifier::Public, Modifier::Static, Modifier::Final])
        .initializer("$L", [Arg::literal(10)])
        .unwrap()
        .build()
        .unwrap();
    assert!(builder().add_property(constant).is_ok());
}

#[test]
fn test_annotation_members_are_public_abstract() {
    let builder = || Declaration::annotation_builder("Retry").unwrap();

    let wrong = FunctionSpec::builder("times")
        .modifier(Modifier::Public)
        .returns(PrimitiveType::Int)
        .build()
        .unwrap();
    assert_eq!(rule_of(builder().add_function(wrong)), Rule::FunctionModifiers);

    let member = FunctionSpec::builder("times")
        .modifiers([Modifier::Public, Modifier::Abstract])
        .returns(PrimitiveType::Int)
        .default_value("3", [])
        .unwrap()
        .build()
        .unwrap();
    assert!(builder().add_function(member).is_ok());
}

#[test]
fn test_default_modifier_and_default_value_placement() {
    let default_method = FunctionSpec::builder("run")
        .modifiers([Modifier::Public, Modifier::Default])
        .build()
        .unwrap();
    let result = Declaration::class_builder("Task")
        .unwrap()
        .add_function(default_method);
    assert_eq!(rule_of(result), Rule::DefaultModifier);

    let with_value = FunctionSpec::builder("size")
        .returns(PrimitiveType::Int)
        .default_value("1", [])
        .unwrap()
        .build()
        .unwrap();
    let result = Declaration::class_builder("Task")
        .unwrap()
        .add_function(with_value);
    assert_eq!(rule_of(result), Rule::DefaultValue);
}

#[test]
fn test_superclass_rules() {
    let interface = Declaration::interface_builder("Service")
        .unwrap()
        .superclass(TypeName::class("com.example", "Base"));
    assert_eq!(rule_of(interface), Rule::Superclass);

    let twice = Declaration::class_builder("Task")
        .unwrap()
        .superclass(TypeName::class("com.example", "Base"))
        .unwrap()
        .superclass(TypeName::class("com.example", "Other"));
    assert_eq!(rule_of(twice), Rule::Superclass);

    let primitive = Declaration::class_builder("Task")
        .unwrap()
        .superclass(PrimitiveType::Int);
    assert_eq!(rule_of(primitive), Rule::Supertype);

    let void = Declaration::class_builder("Task")
        .unwrap()
        .add_superinterface(TypeName::Void);
    assert_eq!(rule_of(void), Rule::Supertype);
}

#[test]
fn test_nested_declaration_rules() {
    let anonymous = Declaration::anonymous_builder(CodeBlock::default())
        .build()
        .unwrap();
    let result = Declaration::class_builder("Outer")
        .unwrap()
        .add_nested(anonymous);
    assert_eq!(rule_of(result), Rule::NestedName);

    let plain = Declaration::class_builder("Inner").unwrap().build().unwrap();
    let result = Declaration::interface_builder("Outer")
        .unwrap()
        .add_nested(plain.clone());
    assert_eq!(rule_of(result), Rule::NestedModifiers);

    assert!(
        Declaration::class_builder("Outer")
            .unwrap()
            .add_nested(plain)
            .is_ok()
    );
}

#[test]
fn test_initializer_blocks_only_in_classes_and_enums() {
    let block = CodeBlock::builder()
        .add_statement("init()", [])
        .unwrap()
        .build();
    let result = Declaration::interface_builder("Service")
        .unwrap()
        .add_static_block(block.clone());
    assert_eq!(rule_of(result), Rule::InitializerBlock);

    let result = Declaration::annotation_builder("Marker")
        .unwrap()
        .add_initializer_block(block);
    assert_eq!(rule_of(result), Rule::InitializerBlock);
}

#[test]
fn test_constructors_only_in_classes_and_enums() {
    let constructor = FunctionSpec::constructor_builder()
        .modifiers([Modifier::Public, Modifier::Static])
        .build()
        .unwrap();
    let result = Declaration::interface_builder("Service")
        .unwrap()
        .add_function(constructor);
    assert_eq!(rule_of(result), Rule::Constructor);
}

#[test]
fn test_errors_render_with_rule_names() {
    let err = Declaration::enum_builder("X").unwrap().build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "enum-constants-required: at least one enum constant is required for X"
    );
}
