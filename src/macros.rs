// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Compile a CSS selector, bailing out of the enclosing fn with
/// `Error::Selector` if it does not parse.
#[macro_export]
macro_rules! sel {
    ($css:expr) => {
        $crate::core::html::selector($css)?
    };
}
