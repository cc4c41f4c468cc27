// Used in both Token and Ast

/// Integer and string values never convert into each other.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Domain {
    Integer,
    String,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Domain::Integer => write!(f, "INTEGER"),
            Domain::String => write!(f, "STRING"),
        }
    }
}

/// A variable name. `A` and `A$` share letters but name different variables.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Integer(String),
    /// Letters only, without the trailing `$`.
    String(String),
}

impl Ident {
    pub fn domain(&self) -> Domain {
        match self {
            Ident::Integer(_) => Domain::Integer,
            Ident::String(_) => Domain::String,
        }
    }

    pub fn letters(&self) -> &str {
        match self {
            Ident::Integer(s) | Ident::String(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Ident::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            String(s) => write!(f, "{}$", s),
        }
    }
}
