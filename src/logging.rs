/// Conditional logging for development builds
///
/// The `log!` macro writes informational messages through
/// `leptos::logging::log!`, which targets the browser console on wasm32 and
/// stdout elsewhere, so pure modules can log while running native tests.
/// Errors should keep using `leptos::logging::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use line_map::logging::log;
///
/// let line = "Orange";
/// log!("Building geometry for the {line} Line");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::leptos::logging::log!($($arg)+);
        }
    };
}

pub use log;
