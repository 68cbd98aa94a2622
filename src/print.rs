use core::fmt;

use colored::Colorize;

use crate::value::{Value, ValueType};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            match self {
                Self::Int(int) => int.to_string().fmt(f),
                Self::Long(long) => write!(f, "{long}L"),
                Self::Double(d) => d.to_string().fmt(f),
                Self::String(string) => write!(f, "{string}"),
                Self::Bool(b) => b.to_string().fmt(f),
                Self::Nil => "nil".fmt(f),
            }
        } else {
            match self {
                Self::Int(int) => int.to_string().cyan().fmt(f),
                Self::Long(long) => format!("{long}L").cyan().fmt(f),
                Self::Double(d) => d.to_string().cyan().fmt(f),
                Self::String(string) => format!(r#""{string}""#).bright_green().fmt(f),
                Self::Bool(b) => b.to_string().bright_blue().fmt(f),
                Self::Nil => "nil".bold().blue().fmt(f),
            }
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => "int".fmt(f),
            Self::Long => "long".fmt(f),
            Self::Double => "double".fmt(f),
            Self::String => "string".fmt(f),
            Self::Bool => "bool".fmt(f),
            Self::Nil => "nil".fmt(f),
        }
    }
}
