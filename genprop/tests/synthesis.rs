//! End-to-end synthesis coverage over hand-built syntax trees.

use anyhow::{Result, ensure};
use genprop::ast::{AssignOp, Decl, Expr, FieldDecl, FuncDecl, SourceFile, Stmt, TypeDecl};
use genprop::{GenerateError, Generator, GeneratorConfig};
use rstest::{fixture, rstest};

fn file(fields: Vec<FieldDecl>) -> SourceFile {
    SourceFile::new("example", vec![Decl::Type(TypeDecl::structure("User", fields))])
}

fn funcs(decls: &[Decl]) -> Vec<&FuncDecl> {
    decls
        .iter()
        .filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            _ => None,
        })
        .collect()
}

fn signatures(decls: &[Decl]) -> Vec<String> {
    funcs(decls).into_iter().map(FuncDecl::signature).collect()
}

#[fixture]
fn id_and_email() -> SourceFile {
    file(vec![
        FieldDecl::named("id", "int").with_tag(r#"`property:"get"`"#),
        FieldDecl::named("email", "string")
            .with_tag(r#"`property:"get,set=private" validate:"required,email"`"#),
    ])
}

#[rstest]
fn getter_and_setter_pairs_without_constructor() -> Result<()> {
    let source = file(vec![
        FieldDecl::named("id", "int").with_tag(r#"`property:"get"`"#),
        FieldDecl::named("name", "string").with_tag(r#"`property:"get,set"`"#),
    ]);
    let decls = Generator::default().generate(&source)?;
    ensure!(decls.len() == 3, "expected three declarations, got {}", decls.len());
    ensure!(
        signatures(&decls)
            == [
                "func (t *User) GetID() int",
                "func (t *User) GetName() string",
                "func (t *User) SetName(v string)",
            ]
    );
    Ok(())
}

#[rstest]
fn validating_constructor_returns_early_on_error(id_and_email: SourceFile) -> Result<()> {
    let generator = Generator::new(GeneratorConfig::default().with_new_func(true));
    let decls = generator.generate(&id_and_email)?;
    let generated = funcs(&decls);
    let constructor = generated
        .first()
        .ok_or_else(|| anyhow::anyhow!("no declarations"))?;
    ensure!(constructor.signature() == "func NewUser(id int, email string) (*User, error)");

    let s = || Expr::ident("s");
    let expected = vec![
        Stmt::Assign {
            lhs: vec![s()],
            op: AssignOp::Define,
            rhs: vec![Expr::AddressOf(Box::new(Expr::EmptyLiteral("User".into())))],
        },
        Stmt::Assign {
            lhs: vec![s().select("id")],
            op: AssignOp::Assign,
            rhs: vec![Expr::ident("id")],
        },
        Stmt::Assign {
            lhs: vec![Expr::ident("err")],
            op: AssignOp::Define,
            rhs: vec![s().select("setEmail").call(vec![Expr::ident("email")])],
        },
        Stmt::If {
            cond: Expr::ident("err").not_nil(),
            body: vec![Stmt::Return(vec![Expr::Nil, Expr::ident("err")])],
        },
        Stmt::Return(vec![s(), Expr::Nil]),
    ];
    ensure!(constructor.body == expected, "unexpected body {:?}", constructor.body);
    Ok(())
}

#[rstest]
fn validating_setter_checks_before_assigning(id_and_email: SourceFile) -> Result<()> {
    let decls = Generator::default().generate(&id_and_email)?;
    let setter = funcs(&decls)
        .into_iter()
        .find(|func| func.name == "setEmail")
        .ok_or_else(|| anyhow::anyhow!("setEmail missing"))?;
    ensure!(setter.signature() == "func (t *User) setEmail(v string) error");
    let validate = Expr::ident("validateFieldValue").call(vec![
        Expr::Str("email".to_owned()),
        Expr::ident("v"),
        Expr::Str("required,email".to_owned()),
    ]);
    ensure!(
        setter.body.first()
            == Some(&Stmt::Assign {
                lhs: vec![Expr::ident("err")],
                op: AssignOp::Define,
                rhs: vec![validate],
            })
    );
    ensure!(setter.body.last() == Some(&Stmt::Return(vec![Expr::Nil])));
    Ok(())
}

#[rstest]
#[case::dash(Some(r#"`property:"-"`"#))]
#[case::empty(Some(r#"`property:""`"#))]
#[case::other_key(Some(r#"`json:"note"`"#))]
#[case::absent(None)]
fn untagged_fields_are_still_constructor_parameters(#[case] tag: Option<&str>) -> Result<()> {
    let field = FieldDecl {
        tag: tag.map(str::to_owned),
        ..FieldDecl::named("note", "string")
    };
    let generator = Generator::new(GeneratorConfig::default().with_new_func(true));
    let decls = generator.generate(&file(vec![field]))?;
    ensure!(signatures(&decls) == ["func NewUser(note string) *User"]);
    let body = funcs(&decls)
        .first()
        .map(|func| func.body.clone())
        .unwrap_or_default();
    ensure!(body.get(1)
        == Some(&Stmt::Assign {
            lhs: vec![Expr::ident("s").select("note")],
            op: AssignOp::Assign,
            rhs: vec![Expr::ident("note")],
        }));
    Ok(())
}

#[rstest]
#[case("foo", "invalid tag value: directive=foo (field User.name)")]
#[case("get, set", "invalid tag value: directive= set (field User.name)")]
#[case("get,", "invalid tag value: directive= (field User.name)")]
fn unknown_directives_abort_the_run(#[case] value: &str, #[case] message: &str) -> Result<()> {
    let source = SourceFile::new(
        "example",
        vec![
            Decl::Type(TypeDecl::structure(
                "Valid",
                vec![FieldDecl::named("id", "int").with_tag(r#"`property:"get"`"#)],
            )),
            Decl::Type(TypeDecl::structure(
                "User",
                vec![FieldDecl::named("name", "string").with_tag(format!("`property:\"{value}\"`"))],
            )),
        ],
    );
    let err = match Generator::default().generate(&source) {
        Err(err) => err,
        Ok(decls) => anyhow::bail!("expected failure, got {decls:?}"),
    };
    ensure!(err.to_string() == message, "unexpected message {err}");
    Ok(())
}

#[rstest]
fn malformed_tag_literal_names_the_field() -> Result<()> {
    let source = file(vec![FieldDecl::named("name", "string").with_tag(r#""property:\q""#)]);
    let result = Generator::new(GeneratorConfig::default().with_new_func(true)).generate(&source);
    ensure!(
        matches!(
            result,
            Err(GenerateError::MalformedTag { ref field, .. }) if field == "name"
        ),
        "unexpected result {result:?}"
    );
    Ok(())
}

#[rstest]
fn double_quoted_tags_are_unescaped() -> Result<()> {
    let source = file(vec![
        FieldDecl::named("id", "int").with_tag(r#""property:\"get\"""#),
    ]);
    let decls = Generator::default().generate(&source)?;
    ensure!(signatures(&decls) == ["func (t *User) GetID() int"]);
    Ok(())
}

#[rstest]
#[case("", "GetApiKey")]
#[case("api", "GetAPIKey")]
#[case("key", "GetApiKey")]
fn configured_initialisms_shape_accessor_names(
    #[case] initialisms: &str,
    #[case] getter: &str,
) -> Result<()> {
    let source = file(vec![
        FieldDecl::named("apiKey", "string").with_tag(r#"`property:"get"`"#),
    ]);
    let generator = Generator::new(GeneratorConfig::default().with_initialisms(initialisms));
    let decls = generator.generate(&source)?;
    let names: Vec<&str> = funcs(&decls).into_iter().map(|func| func.name.as_str()).collect();
    ensure!(names == [getter], "unexpected names {names:?}");
    Ok(())
}

#[rstest]
fn custom_validation_settings_flow_into_setters() -> Result<()> {
    let source = file(vec![FieldDecl::named("age", "int")
        .with_tag(r#"`property:"set" validate:"ignored" check:"gte=0"`"#)]);
    let config = GeneratorConfig::default()
        .with_validation_func("check")
        .with_validation_tag("check");
    let decls = Generator::new(config).generate(&source)?;
    let setter = funcs(&decls)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("setter missing"))?;
    ensure!(setter.signature() == "func (t *User) SetAge(v int) error");
    ensure!(
        setter.body.first()
            == Some(&Stmt::Assign {
                lhs: vec![Expr::ident("err")],
                op: AssignOp::Define,
                rhs: vec![Expr::ident("check").call(vec![
                    Expr::Str("age".to_owned()),
                    Expr::ident("v"),
                    Expr::Str("gte=0".to_owned()),
                ])],
            })
    );
    Ok(())
}

#[rstest]
fn accessors_follow_directive_order() -> Result<()> {
    let source = file(vec![
        FieldDecl::named("name", "string").with_tag(r#"`property:"set,get"`"#),
    ]);
    let decls = Generator::default().generate(&source)?;
    ensure!(
        signatures(&decls)
            == [
                "func (t *User) SetName(v string)",
                "func (t *User) GetName() string",
            ]
    );
    Ok(())
}

#[rstest]
fn generation_is_deterministic(id_and_email: SourceFile) -> Result<()> {
    let generator = Generator::new(GeneratorConfig::default().with_new_func(true));
    let first = generator.generate(&id_and_email)?;
    let second = generator.generate(&id_and_email)?;
    ensure!(first == second);
    Ok(())
}

#[rstest]
fn structs_without_fields_get_a_bare_constructor() -> Result<()> {
    let generator = Generator::new(GeneratorConfig::default().with_new_func(true));
    let decls = generator.generate(&file(Vec::new()))?;
    let generated = funcs(&decls);
    ensure!(generated.len() == 1);
    let constructor = generated.first().ok_or_else(|| anyhow::anyhow!("constructor missing"))?;
    ensure!(constructor.signature() == "func NewUser() *User");
    ensure!(
        constructor.body
            == [Stmt::Return(vec![Expr::AddressOf(Box::new(Expr::EmptyLiteral(
                "User".into()
            )))])]
    );
    Ok(())
}
