// src/macros.rs

/// `String` shorthand. `s!()` is an empty string, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Seconds as a fixed 3-decimal string (`30.123`), the way the table shows times.
#[macro_export]
macro_rules! secs {
    ($v:expr) => {
        ::std::format!("{:.3}", $v)
    };
}
