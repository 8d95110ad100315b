#[cfg(feature = "trace")]
#[macro_export]
macro_rules! lrzero_trace {
    () => {};
    ($($arg:tt)*) => {{
        $crate::__log::trace!(target: "lrzero", $($arg)*)
    }}
}

#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! lrzero_trace {
    () => {};
    ($($arg:tt)*) => {{}};
}
