//! The [`Action`] contract.

use crate::outcome::Outcome;
use crate::validate::Validation;

/// A declared unit of side-effecting work.
///
/// An action is a plain struct whose named fields are its inputs - Rust's
/// struct expression is the keyword-only construction the contract asks for,
/// with no positional ambiguity. The trait adds three things on top of the
/// record:
///
/// - a [`validate`](Action::validate) pass that can fail construction,
/// - exactly one side-effecting entry point, [`invoke`](Action::invoke),
/// - an [`Outcome`] type declaring what the body reports: a record specific
///   to this action, or [`Unit`](crate::Unit) for "nothing".
///
/// Implementations never run their own `invoke`. The only path from a raw
/// struct to a running body is [`make`](crate::make), which gates invocation
/// behind the validation pass and hands back a [`Ready`](crate::Ready)
/// handle - so every action in the system is invoked identically, whatever
/// it does inside.
///
/// # Lifecycle
///
/// Actions are built per call-site, on demand, and idiomatically discarded
/// after one invocation. `invoke` takes `&mut self`, so re-invoking the same
/// instance is representable - but it sits outside the contract's
/// guarantees, and idempotence is entirely the body author's problem. The
/// framework never memoizes: two calls mean the body ran twice.
///
/// # Example
///
/// ```ignore
/// struct BumpCounter {
///     counter: Arc<Mutex<u64>>,
///     by: u64,
/// }
///
/// impl Action for BumpCounter {
///     type Outcome = Unit;
///
///     fn validate(&self) -> Validation {
///         Validation::new().check(self.by > 0, "by must be positive")
///     }
///
///     fn invoke(&mut self) -> anyhow::Result<Unit> {
///         *self.counter.lock().unwrap() += self.by;
///         Ok(Unit)
///     }
/// }
/// ```
pub trait Action: Sized {
    /// What the body reports back: a named-field record owned by this
    /// action, or [`Unit`](crate::Unit).
    type Outcome: Outcome;

    /// Short name used in construction and invocation logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The validation pass.
    ///
    /// Must be a pure function of the stored inputs: structural checks only
    /// (presence, type, non-emptiness), no I/O, no clock reads, no effects.
    /// The default records no checks, so construction always succeeds.
    fn validate(&self) -> Validation {
        Validation::new()
    }

    /// The side-effecting body. This is the one place effects happen.
    ///
    /// Errors returned here propagate to the caller of the `call` family
    /// unmodified - the framework adds nothing and swallows nothing.
    fn invoke(&mut self) -> anyhow::Result<Self::Outcome>;
}
