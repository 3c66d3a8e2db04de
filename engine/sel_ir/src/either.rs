//! Two-variant tagged union.

/// A value that is exactly one of two alternatives.
///
/// Used where the grammar offers two token shapes at one position, such
/// as the attribute value production (identifier or quoted string).
/// Equality is structural and never crosses variants: `A(x) != B(y)`
/// even when the payload types and values coincide.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Either<A, B> {
    A(A),
    B(B),
}

impl<A, B> Either<A, B> {
    /// Eliminate by applying the handler for the populated variant.
    pub fn fold<R>(self, a: impl FnOnce(A) -> R, b: impl FnOnce(B) -> R) -> R {
        match self {
            Either::A(value) => a(value),
            Either::B(value) => b(value),
        }
    }

    /// Borrowing view of the populated variant.
    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::A(value) => Either::A(value),
            Either::B(value) => Either::B(value),
        }
    }

    /// True when the first variant is populated.
    pub fn is_a(&self) -> bool {
        matches!(self, Either::A(_))
    }

    /// True when the second variant is populated.
    pub fn is_b(&self) -> bool {
        matches!(self, Either::B(_))
    }
}
