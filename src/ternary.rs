/// A ternary expression macro.  Rust's `if` is already an expression,
/// but `cargo fmt` insists on spreading it over five lines, and the
/// border rules of the carving algorithm read much better as compact
/// one-line selections.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
