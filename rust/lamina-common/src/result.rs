pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::Error::invalid_arg(name, condition))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::result::Result;

    fn checked(is_set: i32) -> Result<i32> {
        crate::verify_arg!(holder, is_set >= 0);
        Ok(is_set)
    }

    #[test]
    fn test_verify_arg_passes_through() {
        assert_eq!(checked(1).unwrap(), 1);
        assert_eq!(checked(0).unwrap(), 0);
    }

    #[test]
    fn test_verify_arg_reports_name_and_condition() {
        let err = checked(-1).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "holder");
                assert_eq!(message, "is_set >= 0");
            }
            kind => panic!("unexpected error kind: {kind:?}"),
        }
    }
}
