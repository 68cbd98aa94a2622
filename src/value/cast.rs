use ecow::EcoString;
use tap::Pipe;

use super::{SbErr, SbResult, Value, ValueType};

impl Value {
    pub fn to_bool(&self) -> SbResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Nil => Ok(false),
            Self::Int(i) => Ok(*i != 0),
            Self::Long(l) => Ok(*l != 0),
            Self::String(s) => s.parse::<bool>().map_or_else(
                |_| {
                    Err(SbErr::TypeConvErr {
                        from: self.get_type(),
                        val: self.clone(),
                        to: ValueType::Bool,
                    })
                },
                Ok,
            ),

            Self::Double(_) => Err(SbErr::TypeConvErr {
                from: self.get_type(),
                val: self.clone(),
                to: ValueType::Bool,
            }),
        }
    }

    pub fn to_long(&self) -> SbResult<i64> {
        match self {
            Self::Long(l) => Ok(*l),
            Self::Int(i) => Ok(i64::from(*i)),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Nil => Ok(0),
            Self::String(s) => s.parse::<i64>().map_or_else(
                |it| {
                    Err(SbErr::TypeParseErr {
                        from: self.clone(),
                        to: ValueType::Long,
                        err: it.into(),
                    })
                },
                Ok,
            ),

            Self::Double(_) => Err(SbErr::TypeConvErr {
                from: self.get_type(),
                val: self.clone(),
                to: ValueType::Long,
            }),
        }
    }

    // Long does not widen losslessly and is refused here,
    // same as in classification
    pub fn to_double(&self) -> SbResult<f64> {
        match self {
            Self::Double(d) => Ok(*d),
            Self::Int(i) => Ok(f64::from(*i)),

            _ => Err(SbErr::TypeConvErr {
                from: self.get_type(),
                val: self.clone(),
                to: ValueType::Double,
            }),
        }
    }

    pub fn as_str(&self) -> SbResult<EcoString> {
        match self {
            Self::String(s) => s.clone().pipe(Ok),

            _ => Err(SbErr::TypeConvErr {
                from: self.get_type(),
                val: self.clone(),
                to: ValueType::String,
            }),
        }
    }
}
