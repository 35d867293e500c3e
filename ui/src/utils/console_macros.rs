/// Macros for timestamped console logging.
///
/// In the browser these write through gloo_console with a `js_sys::Date`
/// prefix. Off wasm (unit tests, doctests) they go to `tracing` instead,
/// since calling JS bindings there panics.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Debug, format!($fmt, $($arg)*))
    };
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, message: String) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        Level::Debug => gloo_console::debug!(line),
        Level::Info => gloo_console::info!(line),
        Level::Warn => gloo_console::warn!(line),
        Level::Error => gloo_console::error!(line),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, message: String) {
    match level {
        Level::Debug => tracing::debug!("{}", message),
        Level::Info => tracing::info!("{}", message),
        Level::Warn => tracing::warn!("{}", message),
        Level::Error => tracing::error!("{}", message),
    }
}
