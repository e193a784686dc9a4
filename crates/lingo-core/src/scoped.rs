//! Scoped locale-context propagation.
//!
//! Lets concurrently interleaved call chains read a "current" context
//! without threading it through every signature. The context rides a
//! structured task-local: it is visible only inside the scope that
//! established it (including across `.await` points within that scope)
//! and is gone when the scope ends. Nothing here is ambient process
//! state.

use crate::context::LocaleContext;
use crate::resolver::Resolver;
use crate::token::{join_text, Params, Token};
use lingo_common::{LingoError, Result};
use std::future::Future;

tokio::task_local! {
    static CURRENT_CONTEXT: LocaleContext;
}

/// Runs a future with `context` established as the current context for
/// everything it awaits.
pub async fn with_context<F>(context: LocaleContext, future: F) -> F::Output
where
    F: Future,
{
    CURRENT_CONTEXT.scope(context, future).await
}

/// Runs a closure with `context` established as the current context.
pub fn sync_scope<F, R>(context: LocaleContext, f: F) -> R
where
    F: FnOnce() -> R,
{
    CURRENT_CONTEXT.sync_scope(context, f)
}

/// The context established by the nearest enclosing scope, if any.
#[must_use]
pub fn current() -> Option<LocaleContext> {
    CURRENT_CONTEXT.try_with(Clone::clone).ok()
}

impl Resolver {
    /// Resolves a key against the current scoped context.
    ///
    /// # Errors
    ///
    /// Returns [`LingoError::NoContext`] when called outside
    /// [`with_context`]/[`sync_scope`]; otherwise the same conditions as
    /// [`Resolver::resolve`].
    pub fn resolve_scoped<C: Clone>(&self, key: &str, params: &Params<C>) -> Result<Vec<Token<C>>> {
        let context = current().ok_or(LingoError::NoContext)?;
        self.resolve(key, params, &context)
    }

    /// Resolves a key against the current scoped context and joins the
    /// textual tokens.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Resolver::resolve_scoped`].
    pub fn resolve_scoped_text<C: Clone>(&self, key: &str, params: &Params<C>) -> Result<String> {
        Ok(join_text(&self.resolve_scoped(key, params)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use crate::params;

    fn scoped_context() -> LocaleContext {
        LocaleContext::new(["en"]).with_pack("en", pack! { "big-thing" => "The thing is big" })
    }

    #[test]
    fn test_no_context_is_fatal() {
        let resolver = Resolver::new();
        let params: Params = params!();
        let err = resolver.resolve_scoped_text("big-thing", &params).unwrap_err();
        assert!(matches!(err, LingoError::NoContext));
    }

    #[test]
    fn test_current_is_none_outside_scope() {
        assert!(current().is_none());
    }

    #[test]
    fn test_sync_scope_establishes_context() {
        let resolver = Resolver::new();
        let params: Params = params!();
        let text = sync_scope(scoped_context(), || {
            resolver.resolve_scoped_text("big-thing", &params)
        })
        .unwrap();
        assert_eq!(text, "The thing is big");
    }

    #[tokio::test]
    async fn test_with_context_survives_await_points() {
        let resolver = Resolver::new();
        let params: Params = params!();
        let text = with_context(scoped_context(), async {
            tokio::task::yield_now().await;
            resolver.resolve_scoped_text("big-thing", &params)
        })
        .await
        .unwrap();
        assert_eq!(text, "The thing is big");
    }

    #[tokio::test]
    async fn test_scopes_do_not_leak_between_tasks() {
        let outside = tokio::spawn(async { current().is_none() });
        let inside = with_context(scoped_context(), async { current().is_some() }).await;
        assert!(inside);
        assert!(outside.await.unwrap());
    }
}
