//! Construction and invocation: [`make`] and the [`Ready`] handle.
//!
//! State machine per instance:
//!
//! ```text
//! Constructed -> Validating -> Failed (terminal)
//!                           -> Ready -> Invoking -> Completed
//! ```
//!
//! The raw struct is `Constructed`; [`make`] is `Validating`; a
//! [`ValidationError`] is the terminal `Failed`; [`Ready`] is the only
//! invocable form. There is no way to reach `Invoking` around the
//! validation pass.

use tracing::{debug, debug_span, trace};
use uuid::Uuid;

use crate::action::Action;
use crate::error::ValidationError;
use crate::outcome::{Outcome, Unit};

/// The single public factory.
///
/// Runs the action's validation pass. When any check fails, construction
/// fails atomically: the caller gets one [`ValidationError`] aggregating
/// every message in registration order, and no invocable value escapes.
/// Otherwise the action comes back wrapped in [`Ready`].
pub fn make<A: Action>(action: A) -> Result<Ready<A>, ValidationError> {
    match action.validate().into_result() {
        Ok(()) => {
            trace!(action = action.name(), "validation passed");
            Ok(Ready { action })
        }
        Err(err) => {
            debug!(
                action = action.name(),
                failures = %err.joined(),
                "validation failed"
            );
            Err(err)
        }
    }
}

/// A validated, invocable action.
///
/// `Ready` is proof that the validation pass ran and passed; its field is
/// private and [`make`] is the only constructor. Each of the `call` methods
/// runs the body exactly once, synchronously, on the calling thread, and
/// blocks until the body returns. Nothing is deferred, retried, or timed
/// out.
#[derive(Debug)]
pub struct Ready<A: Action> {
    action: A,
}

impl<A> Ready<A>
where
    A: Action<Outcome = Unit>,
{
    /// Invoke an action that reports nothing.
    ///
    /// Only exists when `Outcome = Unit`, so an action with a real outcome
    /// cannot be called in a way that would drop it by accident.
    pub fn call(&mut self) -> anyhow::Result<()> {
        let _span = self.invocation_span().entered();
        let Unit = self.action.invoke()?;
        trace!("completed");
        Ok(())
    }
}

impl<A: Action> Ready<A> {
    /// Invoke the body and deliver its outcome into `continuation`,
    /// exactly once, by value.
    ///
    /// The continuation is the only place the outcome is observable; it
    /// returns nothing, so no result leaks back out of the call. Should the
    /// action's outcome type be [`Unit`], the continuation is never invoked -
    /// there is nothing to deliver.
    pub fn call_with<F>(&mut self, continuation: F) -> anyhow::Result<()>
    where
        F: FnOnce(A::Outcome),
    {
        let _span = self.invocation_span().entered();
        let outcome = self.action.invoke()?;
        if <A::Outcome as Outcome>::IS_UNIT {
            trace!("completed, nothing to deliver");
            return Ok(());
        }
        continuation(outcome);
        trace!("outcome delivered");
        Ok(())
    }

    /// Like [`call_with`](Ready::call_with) for continuations that need `?`.
    ///
    /// An error returned by the continuation propagates to the caller
    /// unmodified, exactly like an error from the body itself.
    pub fn try_call_with<F>(&mut self, continuation: F) -> anyhow::Result<()>
    where
        F: FnOnce(A::Outcome) -> anyhow::Result<()>,
    {
        let _span = self.invocation_span().entered();
        let outcome = self.action.invoke()?;
        if <A::Outcome as Outcome>::IS_UNIT {
            trace!("completed, nothing to deliver");
            return Ok(());
        }
        continuation(outcome)?;
        trace!("outcome delivered");
        Ok(())
    }

    /// Invoke the body and drop whatever it reports.
    ///
    /// This is the sharp edge of the contract, kept on purpose but made
    /// explicit: the effect runs, a produced outcome is discarded without
    /// ceremony, and nothing crashes. The discard is logged at debug level.
    pub fn call_detached(&mut self) -> anyhow::Result<()> {
        let _span = self.invocation_span().entered();
        let outcome = self.action.invoke()?;
        if !<A::Outcome as Outcome>::IS_UNIT {
            debug!(outcome = ?outcome, "outcome discarded, no continuation supplied");
        }
        Ok(())
    }

    /// One span per invocation; the id correlates multi-line logs of a
    /// single call.
    fn invocation_span(&self) -> tracing::Span {
        debug_span!(
            "call",
            action = self.action.name(),
            invocation = %Uuid::new_v4()
        )
    }
}
