use thiserror::Error;

/// Cardinality errors.
///
/// The only fallible surface in this crate: a caller asserting, through
/// [`one`](crate::sequence::SequenceCore::one) or
/// [`option`](crate::sequence::SequenceCore::option), a cardinality the
/// sequence does not have. Every operation in the library proper is total
/// and signals absence through `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sequence of exactly one element was required.
    #[error("expected a singleton sequence, got a sequence of {0} elements")]
    NotOne(usize),
    /// A sequence of at most one element was required.
    #[error("expected an empty or singleton sequence, got a sequence of {0} elements")]
    NotOptional(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
