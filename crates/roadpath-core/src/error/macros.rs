//! Error macros for roadpath

/// Macro for returning a malformed-map error from a parser function
#[macro_export]
macro_rules! bail_map {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::RoadpathError::invalid_map($line, format!($($arg)*)))
    };
}

