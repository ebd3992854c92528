//! Macros used for generating documentation.

/// Generates the doc-comment for the in-place variant of an operation.
/// Takes the name of the copying function as a string literal.
macro_rules! generate_mut_doc_comment {
    ($name:literal) => {
        concat!(
            "An in-place version of [`",
            $name,
            "()`].\n\nThis function does the same operation as [`",
            $name,
            "()`] but writes into the `&mut image` passed instead of returning\n",
            "a modified copy, so no allocation is made for the output."
        )
    };
}
