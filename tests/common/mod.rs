#![allow(dead_code)]
use intbasic::lang::ast::*;
use intbasic::lang::{Config, Error, Ident, Line};

pub fn line(s: &str) -> Line {
    match Line::parse(s, Config::default()) {
        Ok(line) => line,
        Err(e) => panic!("{} : {:?}", s, e),
    }
}

/// Statements of `s` parsed as line 10.
pub fn statements(s: &str) -> Vec<Statement> {
    line(&format!("10 {}", s)).statements().to_vec()
}

pub fn statement(s: &str) -> Statement {
    let mut v = statements(s);
    assert_eq!(v.len(), 1, "{}", s);
    v.pop().unwrap()
}

/// The lone expression of `PRINT s`.
pub fn expr(s: &str) -> Expression {
    match statement(&format!("PRINT {}", s)) {
        Statement::Print(mut items) if items.len() == 1 => match items.pop() {
            Some(PrintItem::Expression(e)) => e,
            _ => panic!("{}", s),
        },
        other => panic!("{} : {:?}", s, other),
    }
}

pub fn error(s: &str) -> Error {
    Line::parse(&format!("10 {}", s), Config::default()).unwrap_err()
}

pub fn expr_error(s: &str) -> Error {
    error(&format!("PRINT {}", s))
}

pub fn ident(s: &str) -> Ident {
    Ident::Integer(s.to_string())
}

pub fn sident(s: &str) -> Ident {
    Ident::String(s.to_string())
}

pub fn int(n: i64) -> Expression {
    Expression::Integer(n)
}

pub fn string(s: &str) -> Expression {
    Expression::String(s.to_string())
}

pub fn var(s: &str) -> Expression {
    Expression::Variable(Variable::Unary(ident(s)))
}

pub fn svar(s: &str) -> Expression {
    Expression::Variable(Variable::Unary(sident(s)))
}

pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Expression {
    Expression::Binary(op, Box::new(lhs), Box::new(rhs))
}

pub fn unary(op: UnaryOp, expr: Expression) -> Expression {
    Expression::Unary(op, Box::new(expr))
}
