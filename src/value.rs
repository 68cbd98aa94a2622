use ecow::EcoString;
use thiserror::Error;

pub type SbResult<T> = Result<T, SbErr>;

pub mod cast;
pub mod value_macro;


/// cheap to clone, only contains small values (with copy)
/// or an `EcoString`
#[derive(Clone, PartialEq, Default)]
pub enum Value {
    Int(i32),
    Long(i64),
    Double(f64),
    String(EcoString),
    Bool(bool),
    #[default]
    Nil,
}

/// Runtime tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Long,
    Double,
    String,
    Bool,
    Nil,
}

impl Value {
    #[must_use]
    pub const fn get_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Long(_) => ValueType::Long,
            Self::Double(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
            Self::Bool(_) => ValueType::Bool,
            Self::Nil => ValueType::Nil,
        }
    }
}

#[derive(Error, Debug)]
pub enum SbErr {
    #[error(transparent)]
    Any(#[from] anyhow::Error),

    #[error("Type error, cannot view {val:?} ({from}) as {to}")]
    TypeConvErr {
        from: ValueType,
        val: Value,
        to: ValueType,
    },

    #[error("Parse error, cannot parse {from:?} into {to}: {err}")]
    TypeParseErr {
        from: Value,
        to: ValueType,
        err: anyhow::Error,
    },
}

impl From<i32> for Value {
    fn from(it: i32) -> Self {
        Self::Int(it)
    }
}

impl From<i64> for Value {
    fn from(it: i64) -> Self {
        Self::Long(it)
    }
}

impl From<f64> for Value {
    fn from(it: f64) -> Self {
        Self::Double(it)
    }
}

impl From<&str> for Value {
    fn from(it: &str) -> Self {
        Self::String(it.into())
    }
}

impl From<EcoString> for Value {
    fn from(it: EcoString) -> Self {
        Self::String(it)
    }
}

impl From<bool> for Value {
    fn from(it: bool) -> Self {
        Self::Bool(it)
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
