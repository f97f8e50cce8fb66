/// Print an informational message
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::print::is_print() {
            println!(
                "{} {}",
                owo_colors::OwoColorize::yellow(&"[info]"),
                format_args!($($arg)*)
            );
        }
    }};
}

/// Print an error message
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {{
        if $crate::print::is_print() {
            eprintln!(
                "{} {}",
                owo_colors::OwoColorize::red(&"[error]"),
                format_args!($($arg)*)
            );
        }
    }};
}
