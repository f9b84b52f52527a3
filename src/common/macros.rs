/// Logs an error with its source location and returns it, for use in
/// `map_err` chains at handler boundaries.
#[macro_export]
macro_rules! log_err {
    ($err:expr, $msg:literal) => {{
        let err = $err;
        ::tracing::error!(
            location = concat!(file!(), ":", line!()),
            error = %err,
            $msg
        );
        err
    }};
}
