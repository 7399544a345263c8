//! `New<Type>` constructor synthesis.
//!
//! Every named field becomes a parameter named after the field. Fields with a
//! setter directive are seeded through that setter; all others are assigned
//! directly. When at least one called setter validates, the constructor
//! returns `(*Type, error)` and bails out on the first failure.

use tracing::debug;

use crate::accessor::setter_name;
use crate::ast::{AssignOp, Expr, FuncDecl, Param, Stmt, TypeExpr};
use crate::config::GeneratorConfig;
use crate::field::FieldPlan;

const INSTANCE: &str = "s";
const ERR: &str = "err";

/// How the constructor seeds one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// `s.x = x`
    Direct,
    /// `s.SetX(x)`
    Setter(String),
    /// `err := s.SetX(x)` followed by an early return on error.
    ValidatingSetter(String),
}

impl Seed {
    /// Classifies `field`.
    ///
    /// Fields without a setter directive fall back to direct assignment even
    /// when they carry a validation rule, so such rules are not enforced at
    /// construction time.
    #[must_use]
    pub fn classify(config: &GeneratorConfig, field: &FieldPlan) -> Self {
        match (field.directives.setter(), field.validation.is_some()) {
            (None, _) => Self::Direct,
            (Some(visibility), false) => Self::Setter(setter_name(config, field, visibility)),
            (Some(visibility), true) => {
                Self::ValidatingSetter(setter_name(config, field, visibility))
            }
        }
    }
}

/// Builds the constructor for one struct.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorSynthesizer<'a> {
    type_name: &'a str,
    config: &'a GeneratorConfig,
}

impl<'a> ConstructorSynthesizer<'a> {
    /// Creates a synthesizer for `New<type_name>`.
    #[must_use]
    pub const fn new(type_name: &'a str, config: &'a GeneratorConfig) -> Self {
        Self { type_name, config }
    }

    /// Emits the constructor over `fields` in declaration order.
    #[must_use]
    pub fn constructor(&self, fields: &[FieldPlan]) -> FuncDecl {
        let ty = TypeExpr::new(self.type_name);
        let mut params = Vec::with_capacity(fields.len());
        let mut seeds = Vec::with_capacity(fields.len() * 2);
        let mut err_declared = false;

        for field in fields {
            params.push(Param::new(field.name.clone(), field.ty.clone()));
            match Seed::classify(self.config, field) {
                Seed::Direct => seeds.push(Stmt::Assign {
                    lhs: vec![Expr::ident(INSTANCE).select(&field.name)],
                    op: AssignOp::Assign,
                    rhs: vec![Expr::ident(&field.name)],
                }),
                Seed::Setter(method) => {
                    seeds.push(Stmt::Expr(setter_call(&method, &field.name)));
                }
                Seed::ValidatingSetter(method) => {
                    let op = if err_declared {
                        AssignOp::Assign
                    } else {
                        AssignOp::Define
                    };
                    err_declared = true;
                    seeds.push(Stmt::Assign {
                        lhs: vec![Expr::ident(ERR)],
                        op,
                        rhs: vec![setter_call(&method, &field.name)],
                    });
                    seeds.push(Stmt::If {
                        cond: Expr::ident(ERR).not_nil(),
                        body: vec![Stmt::Return(vec![Expr::Nil, Expr::ident(ERR)])],
                    });
                }
            }
        }

        let validating = err_declared;
        let results = if validating {
            vec![ty.pointer(), TypeExpr::error()]
        } else {
            vec![ty.pointer()]
        };
        let fresh = Expr::AddressOf(Box::new(Expr::EmptyLiteral(ty)));
        let body = if seeds.is_empty() {
            vec![Stmt::Return(vec![fresh])]
        } else {
            let mut body = Vec::with_capacity(seeds.len() + 2);
            body.push(Stmt::Assign {
                lhs: vec![Expr::ident(INSTANCE)],
                op: AssignOp::Define,
                rhs: vec![fresh],
            });
            body.append(&mut seeds);
            body.push(Stmt::Return(if validating {
                vec![Expr::ident(INSTANCE), Expr::Nil]
            } else {
                vec![Expr::ident(INSTANCE)]
            }));
            body
        };

        debug!(
            type_name = self.type_name,
            params = params.len(),
            validating,
            "synthesized constructor"
        );
        FuncDecl {
            receiver: None,
            name: format!("New{}", self.type_name),
            params,
            results,
            body,
        }
    }
}

fn setter_call(method: &str, field: &str) -> Expr {
    Expr::ident(INSTANCE)
        .select(method)
        .call(vec![Expr::ident(field)])
}
