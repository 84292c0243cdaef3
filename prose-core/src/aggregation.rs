//! Aggregation
//!
//!     Aggregation merges two parallel clauses into one coordinated phrase, eliding the
//!     material they share. It runs before the realisation pipeline, on trees whose words are
//!     already inflected.
//!
//! Flattening
//!
//!     Clauses nest their arguments inside verb phrases. [flatten] walks a clause's components
//!     and splices every verb phrase in place, so subjects, verbs and objects end up side by
//!     side and two clauses can be compared position by position.
//!
//! Pairing
//!
//!     [pair_constituents] lines up the flattened sequences of two trees. Every position must
//!     agree on category and discourse function or the whole pairing is abandoned. Each
//!     [Pairing] records which side of the verb it sits on ([Periphery]) and addresses its
//!     members by path, so the trees themselves are only read.
//!
//! Rules
//!
//!     An [AggregationRule] either produces a merged element or declines. Declining is the
//!     normal outcome when clauses do not line up; it is never an error. Rules copy their
//!     inputs before eliding anything, so a declined (or successful) rule leaves the caller's
//!     trees untouched. The [Aggregator] tries its rules over consecutive pairs of siblings.

pub mod flatten;
pub mod pairing;
pub mod rules;

pub use flatten::{flatten, ComponentPath, Flatten};
pub use pairing::{pair_constituents, LemmaPolicy, Member, Pairing, Periphery};
pub use rules::{
    AggregationRule, Aggregator, BackwardConjunctionReduction, ForwardConjunctionReduction,
    DEFAULT_CONJUNCTION,
};
