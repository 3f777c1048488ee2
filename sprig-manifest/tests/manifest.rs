//! End-to-end tests: sprig.toml in, rendered source out.

use std::str::FromStr;

use sprig_codegen::Rule;
use sprig_manifest::{Error, Manifest};

const GREETER: &str = r#"
[render]
indent = 4
package = "com.example"

[[declarations]]
kind = "class"
name = "Greeter"
modifiers = ["public", "final"]
doc = "Greets people."
superclass = "com.example.Base"
superinterfaces = ["java.lang.Runnable"]

[[declarations.properties]]
name = "count"
type = "int"
modifiers = ["private", "static"]
initializer = "0"

[[declarations.properties]]
name = "name"
type = "java.lang.String"
modifiers = ["private", "final"]

[[declarations.functions]]
modifiers = ["public"]
parameters = [{ name = "name", type = "java.lang.String" }]
body = ["this.name = name"]

[[declarations.functions]]
name = "run"
modifiers = ["public"]
annotations = [{ type = "java.lang.Override" }]
body = ['count += 1', 'System.out.println("Hello, " + name)']
"#;

fn declaration_error(toml: &str) -> (String, Rule) {
    let manifest = Manifest::from_str(toml).unwrap();
    let err = manifest.declarations().unwrap_err();
    match *err {
        Error::Declaration { path, source, .. } => {
            (path, source.rule().expect("expected an invariant violation"))
        }
        other => panic!("expected a declaration error, got {other:?}"),
    }
}

#[test]
fn test_render_class_from_manifest() {
    let manifest = Manifest::from_str(GREETER).unwrap();
    let declarations = manifest.declarations().unwrap();
    assert_eq!(declarations.len(), 1);

    let rendered = declarations[0].render_with(&manifest.render).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    /**
     * Greets people.
     */
    public final class Greeter extends Base implements Runnable {
        private static int count = 0;

        private final String name;

        public Greeter(String name) {
            this.name = name;
        }

        @Override
        public void run() {
            count += 1;
            System.out.println("Hello, " + name);
        }
    }
    "#);
}

#[test]
fn test_render_enum_and_nested_types() {
    let manifest = Manifest::from_str(
        r#"
        [[declarations]]
        kind = "interface"
        name = "Shapes"
        modifiers = ["public"]

        [[declarations.nested]]
        kind = "enum"
        name = "Kind"
        modifiers = ["public", "static"]

        [[declarations.nested.enum_constants]]
        name = "CIRCLE"
        arguments = "1"

        [[declarations.nested.enum_constants]]
        name = "SQUARE"
        arguments = "4"

        [[declarations.nested.enum_constants.functions]]
        name = "isRegular"
        modifiers = ["public"]
        returns = "boolean"
        body = ["return true"]

        [[declarations.nested.properties]]
        name = "corners"
        type = "int"
        modifiers = ["private", "final"]

        [[declarations.nested.functions]]
        parameters = [{ name = "corners", type = "int" }]
        body = ["this.corners = corners"]
        "#,
    )
    .unwrap();

    let declarations = manifest.declarations().unwrap();
    insta::assert_snapshot!(declarations[0].render().unwrap(), @r"
    public interface Shapes {
      enum Kind {
        CIRCLE(1),

        SQUARE(4) {
          public boolean isRegular() {
            return true;
          }
        };

        private final int corners;

        Kind(int corners) {
          this.corners = corners;
        }
      }
    }
    ");
}

#[test]
fn test_annotation_manifest() {
    let manifest = Manifest::from_str(
        r#"
        [[declarations]]
        kind = "annotation"
        name = "Retry"
        modifiers = ["public"]
        annotations = [{ type = "java.lang.annotation.Documented" }]

        [[declarations.functions]]
        name = "times"
        modifiers = ["public", "abstract"]
        returns = "int"
        default = "3"
        "#,
    )
    .unwrap();

    let declarations = manifest.declarations().unwrap();
    assert_eq!(
        declarations[0].render().unwrap(),
        "@java.lang.annotation.Documented\npublic @interface Retry {\n  public abstract int times() default 3;\n}\n"
    );
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprig.toml");
    std::fs::write(&path, GREETER).unwrap();

    let manifest = Manifest::from_file(&path).unwrap();
    assert_eq!(manifest.source().filename(), path.display().to_string());
    assert_eq!(manifest.declarations().unwrap().len(), 1);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Manifest::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_builder_errors_carry_manifest_path() {
    let (path, rule) = declaration_error(
        r#"
        [[declarations]]
        kind = "interface"
        name = "Service"

        [[declarations.functions]]
        name = "run"
        modifiers = ["public"]
        "#,
    );
    assert_eq!(path, "declarations[0].functions[0]");
    assert_eq!(rule, Rule::FunctionModifiers);
}

#[test]
fn test_nested_errors_carry_nested_path() {
    let (path, rule) = declaration_error(
        r#"
        [[declarations]]
        kind = "class"
        name = "Outer"

        [[declarations.nested]]
        kind = "interface"
        name = "Inner"
        modifiers = ["static"]

        [[declarations.nested.properties]]
        name = "LIMIT"
        type = "int"
        modifiers = ["public", "static"]
        initializer = "10"
        "#,
    );
    assert_eq!(path, "declarations[0].nested[0].properties[0]");
    assert_eq!(rule, Rule::PropertyModifiers);
}

#[test]
fn test_enum_without_constants() {
    let (path, rule) = declaration_error(
        r#"
        [[declarations]]
        kind = "enum"
        name = "Empty"
        "#,
    );
    assert_eq!(path, "declarations[0]");
    assert_eq!(rule, Rule::EnumConstantsRequired);
}

#[test]
fn test_primitive_superclass() {
    let (path, rule) = declaration_error(
        r#"
        [[declarations]]
        kind = "class"
        name = "Weird"
        superclass = "int"
        "#,
    );
    assert_eq!(path, "declarations[0].superclass");
    assert_eq!(rule, Rule::Supertype);
}

#[test]
fn test_unparseable_type() {
    let manifest = Manifest::from_str(
        r#"
        [[declarations]]
        kind = "class"
        name = "Holder"

        [[declarations.properties]]
        name = "items"
        type = "java.util.List<"
        "#,
    )
    .unwrap();
    let err = manifest.declarations().unwrap_err();
    assert!(matches!(
        err.declaration_source(),
        Some(sprig_codegen::Error::InvalidType { .. })
    ));
    assert!(err.to_string().starts_with("invalid declaration at 'declarations[0].properties[0]'"));
}
