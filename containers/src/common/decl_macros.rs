// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given expression in `Ok(..)`. With no arguments it produces `Ok(())`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Similar to [`assert_eq!`] but automatically prints the left and right hand side
/// values as a colored diff when they don't match. Uses [`pretty_assertions`].
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
