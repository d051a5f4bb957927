//! Composable adaptor stages.
//!
//! A [`Stage`] turns one value into another. Stages can be applied directly
//! or combined with [`Compose::then`] into a [`Chain`] that is applied later,
//! so a pipeline ending in "...then cache the latest element" can be built
//! without naming the wrapped sequence type.
//!
//! ## Example
//!
//! ```rust
//! use cache_latest::pipeline::{self, Compose, SequenceExt};
//!
//! // Direct call.
//! let view = (0usize..3).cache_latest();
//! assert_eq!(view.len(), 3);
//!
//! // Deferred stage, possibly after other stages.
//! let stages = pipeline::stage(|r: std::ops::Range<usize>| r.start + 1..r.end)
//!     .then(pipeline::cache_latest());
//! let items: Vec<usize> = (0usize..4).pipe(stages).into_iter().collect();
//! assert_eq!(items, vec![1, 2, 3]);
//! ```

use crate::traits::Sequence;
use crate::view::CacheLatest;

/// A deferred transformation from `In` to [`Stage::Output`].
pub trait Stage<In> {
    type Output;

    /// Applies the stage to `input`.
    fn apply(self, input: In) -> Self::Output;
}

/// Composition of stages.
///
/// Kept separate from [`Stage`] so that `then` does not need to know the
/// input type of the stage it is called on.
pub trait Compose: Sized {
    /// Returns a stage that runs `self`, then `next`.
    fn then<Next>(self, next: Next) -> Chain<Self, Next> {
        Chain { first: self, second: next }
    }
}

/// Two stages run back to back.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Stage<In> for Chain<A, B>
where
    A: Stage<In>,
    B: Stage<A::Output>,
{
    type Output = B::Output;

    fn apply(self, input: In) -> B::Output {
        self.second.apply(self.first.apply(input))
    }
}

impl<A, B> Compose for Chain<A, B> {}

/// No-argument stage wrapping its input in a [`CacheLatest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheLatestStage;

impl<S: Sequence> Stage<S> for CacheLatestStage {
    type Output = CacheLatest<S>;

    fn apply(self, input: S) -> CacheLatest<S> {
        CacheLatest::new(input)
    }
}

impl Compose for CacheLatestStage {}

/// Returns the caching stage.
pub const fn cache_latest() -> CacheLatestStage {
    CacheLatestStage
}

/// Stage backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnStage<F>(F);

impl<In, Out, F> Stage<In> for FnStage<F>
where
    F: FnOnce(In) -> Out,
{
    type Output = Out;

    fn apply(self, input: In) -> Out {
        (self.0)(input)
    }
}

impl<F> Compose for FnStage<F> {}

/// Wraps a closure as a stage.
pub fn stage<F>(f: F) -> FnStage<F> {
    FnStage(f)
}

/// Adaptor methods available on every [`Sequence`].
pub trait SequenceExt: Sequence + Sized {
    /// Wraps `self` in a [`CacheLatest`].
    fn cache_latest(self) -> CacheLatest<Self> {
        CacheLatest::new(self)
    }

    /// Applies a stage (or chain of stages) to `self`.
    fn pipe<T: Stage<Self>>(self, stage: T) -> T::Output {
        stage.apply(self)
    }
}

impl<S: Sequence> SequenceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ext_method_wraps_sequence() {
        let view = vec![1, 2, 3].cache_latest();
        assert_eq!(view.len(), 3);
        assert!(!view.has_cached());
    }

    #[test]
    fn stage_applies_directly() {
        let view = cache_latest().apply(0u64..5);
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn pipe_applies_stage() {
        let items: Vec<u32> = (1u32..4).pipe(cache_latest()).into_iter().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn chain_runs_in_order() {
        let chain = stage(|v: Vec<i32>| v.into_iter().rev().collect::<Vec<_>>())
            .then(stage(|v: Vec<i32>| v.into_iter().map(|x| x * 2).collect::<Vec<_>>()))
            .then(cache_latest());
        let items: Vec<i32> = vec![1, 2, 3].pipe(chain).into_iter().collect();
        assert_eq!(items, vec![6, 4, 2]);
    }

    #[test]
    fn stage_can_be_reused_when_copy() {
        let caching = cache_latest();
        let a = caching.apply(0usize..2);
        let b = caching.apply(0usize..3);
        assert_eq!(a.len() + b.len(), 5);
    }
}
