//! The expansion logic behind the `kindred-macro` procedural macros, kept in a plain library so
//! it can be tested without a proc-macro boundary, along with a value-level [`model`] of the
//! kind-sequence algebra that `kindred`'s build script uses to generate its type-level tests.

use {
    proc_macro2::Span,
    std::fmt,
    thiserror::Error,
};

pub mod kind;
pub mod model;
pub mod path;
pub mod slot;
pub mod tuples;
pub mod unary;

/// Every way a derive or a generator invocation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompileError {
    #[error("kinds cannot have lifetime parameters")]
    LifetimeParameter,
    #[error("kinds cannot have const parameters")]
    ConstParameter,
    #[error("expected `#[kind(name = \"...\")]`")]
    MalformedKindAttribute,
    #[error("unknown `kind` attribute key `{0}`")]
    UnknownKindAttribute(String),
    #[error("duplicate `kind` attribute key `{0}`")]
    DuplicateKindAttribute(String),
    #[error("`Slot` cannot be derived for unions")]
    SlotOnUnion,
    #[error("at most one field may be marked `#[slot(next)]`")]
    DuplicateNext,
    #[error("expected `#[slot(next)]`")]
    MalformedSlotAttribute,
    #[error("`#[slot(next)]` must name a field of a struct")]
    NextOutsideStruct,
}

/// A value paired with the span it was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<T> {
    pub inner: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl From<Spanned<CompileError>> for syn::Error {
    fn from(err: Spanned<CompileError>) -> Self {
        syn::Error::new(err.span, err.inner)
    }
}

impl CompileError {
    /// Attach a span, producing the `syn::Error` that ends up in the user's build output.
    pub fn at(self, span: Span) -> syn::Error {
        Spanned::new(self, span).into()
    }
}
