use super::token::Function;
use super::{Domain, Ident, Line, LineNumber, Program};

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Call(Expression),
    Color(Expression),
    Dim(Vec<Variable>),
    Dsp(Ident),
    End,
    For(Ident, Expression, Expression, Option<Expression>),
    Gosub(Expression),
    Goto(Expression),
    Gr,
    Hlin(Expression, Expression, Expression),
    If(Expression, Consequent),
    InNumber(Expression),
    Input(Option<Expression>, Vec<Variable>),
    Let(Variable, Expression),
    List(Option<LineNumber>, Option<LineNumber>),
    Next(Vec<Ident>),
    NoDsp(Ident),
    NoTrace,
    Plot(Expression, Expression),
    Poke(Expression, Expression),
    Pop,
    PrNumber(Expression),
    Print(Vec<PrintItem>),
    Rem(String),
    Return,
    Tab(Expression),
    Text,
    Trace,
    Vlin(Expression, Expression, Expression),
    Vtab(Expression),
}

impl Statement {
    /// False when a PRINT ends with a separator.
    pub fn ends_line(&self) -> bool {
        match self {
            Statement::Print(items) => !matches!(
                items.last(),
                Some(PrintItem::Comma) | Some(PrintItem::Semicolon)
            ),
            _ => true,
        }
    }
}

/// What follows THEN.
#[derive(Debug, PartialEq, Clone)]
pub enum Consequent {
    Statement(Box<Statement>),
    Jump(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    Expression(Expression),
    /// Advance to the next tab column.
    Comma,
    Semicolon,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Unary(Ident),
    Array(Ident, Box<Expression>),
    /// Characters of a string from the first index through the second.
    Slice(Ident, Box<Expression>, Box<Expression>),
}

impl Variable {
    pub fn ident(&self) -> &Ident {
        match self {
            Variable::Unary(ident) | Variable::Array(ident, _) | Variable::Slice(ident, ..) => {
                ident
            }
        }
    }

    pub fn domain(&self) -> Domain {
        self.ident().domain()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i64),
    String(String),
    Variable(Variable),
    Function(Function, Vec<Expression>),
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Fixed by structure; the parser never builds a mixed tree.
    pub fn domain(&self) -> Domain {
        use Expression::*;
        match self {
            Integer(_) | Function(..) | Unary(..) | Binary(..) => Domain::Integer,
            String(_) => Domain::String,
            Variable(var) => var.domain(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Power,
    Multiply,
    Divide,
    Modulus,
    Add,
    Subtract,
    Equal,
    Hash,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
    /// `=` between strings.
    StrEqual,
    /// `#` between strings.
    StrHash,
}

impl BinaryOp {
    pub fn is_relational(self) -> bool {
        use BinaryOp::*;
        !matches!(self, Power | Multiply | Divide | Modulus | Add | Subtract)
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_ident(&mut self, _: &Ident) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Ident {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_ident(self)
    }
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Variable::*;
        match self {
            Unary(ident) => {
                ident.accept(visitor);
            }
            Array(ident, expr) => {
                ident.accept(visitor);
                expr.accept(visitor);
            }
            Slice(ident, expr1, expr2) => {
                ident.accept(visitor);
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            End | Gr | NoTrace | Pop | Return | Text | Trace | Rem(_) | List(..) => {}
            Call(expr) | Color(expr) | Gosub(expr) | Goto(expr) | InNumber(expr)
            | PrNumber(expr) | Tab(expr) | Vtab(expr) => {
                expr.accept(visitor);
            }
            Dim(vec_var) => {
                for var in vec_var {
                    var.accept(visitor);
                }
            }
            Dsp(ident) | NoDsp(ident) => {
                ident.accept(visitor);
            }
            For(ident, expr1, expr2, expr3) => {
                ident.accept(visitor);
                expr1.accept(visitor);
                expr2.accept(visitor);
                if let Some(expr3) = expr3 {
                    expr3.accept(visitor);
                }
            }
            Hlin(expr1, expr2, expr3) | Vlin(expr1, expr2, expr3) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
                expr3.accept(visitor);
            }
            If(predicate, consequent) => {
                predicate.accept(visitor);
                match consequent {
                    Consequent::Statement(stmt) => stmt.accept(visitor),
                    Consequent::Jump(expr) => expr.accept(visitor),
                }
            }
            Input(prompt, vec_var) => {
                if let Some(prompt) = prompt {
                    prompt.accept(visitor);
                }
                for var in vec_var {
                    var.accept(visitor);
                }
            }
            Let(var, expr) => {
                var.accept(visitor);
                expr.accept(visitor);
            }
            Next(vec_ident) => {
                for ident in vec_ident {
                    ident.accept(visitor);
                }
            }
            Plot(expr1, expr2) | Poke(expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
            Print(items) => {
                for item in items {
                    if let PrintItem::Expression(expr) = item {
                        expr.accept(visitor);
                    }
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Integer(_) | String(_) => {}
            Variable(var) => var.accept(visitor),
            Function(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Unary(_, expr) => expr.accept(visitor),
            Binary(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}

impl AcceptVisitor for Line {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        for stmt in self.statements() {
            stmt.accept(visitor);
        }
    }
}

impl AcceptVisitor for Program {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        for line in self.iter() {
            line.accept(visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        idents: usize,
        expressions: usize,
        statements: usize,
    }

    impl Visitor for Counter {
        fn visit_ident(&mut self, _: &Ident) {
            self.idents += 1;
        }
        fn visit_expression(&mut self, _: &Expression) {
            self.expressions += 1;
        }
        fn visit_statement(&mut self, _: &Statement) {
            self.statements += 1;
        }
    }

    #[test]
    fn test_visit_nested_if() {
        let x = Ident::Integer("X".to_string());
        let stmt = Statement::If(
            Expression::Variable(Variable::Unary(x.clone())),
            Consequent::Statement(Box::new(Statement::Print(vec![
                PrintItem::Expression(Expression::Variable(Variable::Array(
                    x,
                    Box::new(Expression::Integer(1)),
                ))),
                PrintItem::Semicolon,
            ]))),
        );
        let mut counter = Counter::default();
        stmt.accept(&mut counter);
        assert_eq!(counter.idents, 2);
        assert_eq!(counter.expressions, 3);
        assert_eq!(counter.statements, 2);
    }

    #[test]
    fn test_ends_line() {
        assert!(Statement::Print(vec![]).ends_line());
        assert!(!Statement::Print(vec![PrintItem::Comma]).ends_line());
        assert!(Statement::End.ends_line());
    }

    #[test]
    fn test_domain() {
        let s = Ident::String("A".to_string());
        assert_eq!(
            Expression::Variable(Variable::Unary(s.clone())).domain(),
            Domain::String
        );
        let len = Expression::Function(
            Function::Len,
            vec![Expression::Variable(Variable::Unary(s))],
        );
        assert_eq!(len.domain(), Domain::Integer);
        assert!(BinaryOp::StrEqual.is_relational());
        assert!(!BinaryOp::Power.is_relational());
    }
}
