#[doc = "Return the error provided if the predicate is false"]
macro_rules! ensure {
    ($pred:expr,  $err:expr) => {
        if !$pred {
            return Err($err);
        }
    };
}

#[doc = "Emit a trace event for one codec call, tagged with the codec name"]
macro_rules! trace_codec {
    ($op:literal, $name:expr, $len:expr) => {
        tracing::trace!(codec = $name, len = $len, "{} called", $op)
    };
}
