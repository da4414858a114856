use std::fmt;
use std::str::FromStr;

/// Element types selectable with `--dtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl DType {
    pub const NAMES: [&'static str; 10] = [
        "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64",
    ];
}

impl FromStr for DType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i8" => Ok(DType::I8),
            "i16" => Ok(DType::I16),
            "i32" => Ok(DType::I32),
            "i64" => Ok(DType::I64),
            "u8" => Ok(DType::U8),
            "u16" => Ok(DType::U16),
            "u32" => Ok(DType::U32),
            "u64" => Ok(DType::U64),
            "f32" => Ok(DType::F32),
            "f64" => Ok(DType::F64),
            _ => Err(format!(
                "Unknown dtype: {}. Valid options are {}",
                s,
                DType::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::F32 => "f32",
            DType::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Calls `$func::<T>(args..)` with `T` chosen by a [`DType`] value.
#[macro_export]
macro_rules! with_dtype {
    ($dtype:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $dtype {
            $crate::dtype::DType::I8 => $func::<i8>($($arg),*),
            $crate::dtype::DType::I16 => $func::<i16>($($arg),*),
            $crate::dtype::DType::I32 => $func::<i32>($($arg),*),
            $crate::dtype::DType::I64 => $func::<i64>($($arg),*),
            $crate::dtype::DType::U8 => $func::<u8>($($arg),*),
            $crate::dtype::DType::U16 => $func::<u16>($($arg),*),
            $crate::dtype::DType::U32 => $func::<u32>($($arg),*),
            $crate::dtype::DType::U64 => $func::<u64>($($arg),*),
            $crate::dtype::DType::F32 => $func::<f32>($($arg),*),
            $crate::dtype::DType::F64 => $func::<f64>($($arg),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in DType::NAMES {
            let dtype: DType = name.parse().unwrap();
            assert_eq!(dtype.to_string(), name);
        }
        assert!("complex".parse::<DType>().is_err());
    }
}
