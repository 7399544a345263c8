//! Getter and setter synthesis.
//!
//! Every accessor uses a pointer receiver named `t`; setters take their new
//! value as `v`. A setter on a field carrying a validation rule returns
//! `error` and checks the value before assigning it; otherwise it assigns
//! unconditionally and returns nothing.

use tracing::debug;

use crate::ast::{AssignOp, Expr, FuncDecl, Param, Receiver, Stmt, TypeExpr};
use crate::config::GeneratorConfig;
use crate::field::FieldPlan;
use crate::tag::{Directive, SetterVisibility};

const RECEIVER: &str = "t";
const VALUE: &str = "v";
const ERR: &str = "err";

/// Builds accessor declarations for one struct.
#[derive(Debug, Clone, Copy)]
pub struct AccessorSynthesizer<'a> {
    type_name: &'a str,
    config: &'a GeneratorConfig,
}

impl<'a> AccessorSynthesizer<'a> {
    /// Creates a synthesizer for methods on `type_name`.
    #[must_use]
    pub const fn new(type_name: &'a str, config: &'a GeneratorConfig) -> Self {
        Self { type_name, config }
    }

    /// Emits one declaration per directive of `field`, in tag order.
    #[must_use]
    pub fn field_accessors(&self, field: &FieldPlan) -> Vec<FuncDecl> {
        field
            .directives
            .iter()
            .map(|directive| self.accessor(field, directive))
            .collect()
    }

    /// Emits the declaration requested by `directive`.
    #[must_use]
    pub fn accessor(&self, field: &FieldPlan, directive: Directive) -> FuncDecl {
        let decl = match directive {
            Directive::Get => self.getter(field),
            Directive::Set => self.setter(field, SetterVisibility::Public),
            Directive::SetPrivate => self.setter(field, SetterVisibility::Private),
        };
        debug!(
            type_name = self.type_name,
            field = %field.name,
            %directive,
            method = %decl.name,
            "synthesized accessor"
        );
        decl
    }

    /// `func (t *T) GetX() F { return t.x }`
    #[must_use]
    pub fn getter(&self, field: &FieldPlan) -> FuncDecl {
        FuncDecl {
            receiver: Some(self.receiver()),
            name: format!("Get{}", self.config.names.exported(&field.name)),
            params: Vec::new(),
            results: vec![field.ty.clone()],
            body: vec![Stmt::Return(vec![field_of_receiver(&field.name)])],
        }
    }

    /// `func (t *T) SetX(v F)`, or the `error`-returning validating form.
    #[must_use]
    pub fn setter(&self, field: &FieldPlan, visibility: SetterVisibility) -> FuncDecl {
        let name = setter_name(self.config, field, visibility);
        let assign = || Stmt::Assign {
            lhs: vec![field_of_receiver(&field.name)],
            op: AssignOp::Assign,
            rhs: vec![Expr::ident(VALUE)],
        };
        let (results, body) = field.validation.as_ref().map_or_else(
            || (Vec::new(), vec![assign()]),
            |rule| {
                (
                    vec![TypeExpr::error()],
                    vec![
                        Stmt::Assign {
                            lhs: vec![Expr::ident(ERR)],
                            op: AssignOp::Define,
                            rhs: vec![Expr::ident(&self.config.validation_func).call(vec![
                                Expr::Str(field.name.clone()),
                                Expr::ident(VALUE),
                                Expr::Str(rule.clone()),
                            ])],
                        },
                        Stmt::If {
                            cond: Expr::ident(ERR).not_nil(),
                            body: vec![Stmt::Return(vec![Expr::ident(ERR)])],
                        },
                        assign(),
                        Stmt::Return(vec![Expr::Nil]),
                    ],
                )
            },
        );
        FuncDecl {
            receiver: Some(self.receiver()),
            name,
            params: vec![Param::new(VALUE, field.ty.clone())],
            results,
            body,
        }
    }

    fn receiver(&self) -> Receiver {
        Receiver {
            name: RECEIVER.to_owned(),
            ty: TypeExpr::new(self.type_name).pointer(),
        }
    }
}

/// Name of the setter method generated for `field` with `visibility`.
pub(crate) fn setter_name(
    config: &GeneratorConfig,
    field: &FieldPlan,
    visibility: SetterVisibility,
) -> String {
    format!("{}{}", visibility.verb(), config.names.exported(&field.name))
}

fn field_of_receiver(field: &str) -> Expr {
    Expr::ident(RECEIVER).select(field)
}
