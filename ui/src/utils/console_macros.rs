/// Browser console logging with a millisecond timestamp prefix.
///
/// These call browser APIs through gloo_console, so use them from components
/// and wasm-only code; shared logic logs through `tracing`.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($($arg:tt)*) => {
        format!("[{}] {}", js_sys::Date::now(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!($crate::__console_line!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!($crate::__console_line!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!($crate::__console_line!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        gloo_console::debug!($crate::__console_line!($($arg)*))
    };
}
