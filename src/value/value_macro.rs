pub use super::Value;

#[macro_export]
macro_rules! value {
    (int $it:expr) => {
        $crate::Value::Int($it)
    };

    (long $it:expr) => {
        $crate::Value::Long($it)
    };

    (double $it:expr) => {
        $crate::Value::Double($it)
    };

    (str $it:expr) => {
        $crate::Value::String($it.into())
    };

    (bool $it:literal) => {
        $crate::Value::Bool($it)
    };

    (nil) => {
        $crate::Value::Nil
    };
}
