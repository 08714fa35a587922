/// Macros for timestamped console logging.
///
/// In the browser these wrap `gloo_console` and prefix the message with
/// `js_sys::Date::now()`. Off-browser (native builds and tests) the same
/// calls are routed to `tracing`, since the browser console imports are not
/// callable outside of WASM.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $message:expr) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $message));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::$level!("{}", $message);
        }
    }};
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_emit!(info, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_emit!(warn, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_emit!(error, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_emit!(debug, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(debug, format!($fmt, $($arg)*))
    };
}
