//! Thread-local mode scopes.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;

use super::ModeState;
use crate::logging::targets;
use crate::{Error, Result};

thread_local! {
    static SCOPES: RefCell<Vec<Arc<ModeState>>> = const { RefCell::new(Vec::new()) };
}

/// Access to the mode state of the enclosing scope.
///
/// Scopes nest per thread; the innermost one wins.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_lattice_variants::prelude::*;
///
/// assert!(ModeScope::try_current().is_err());
///
/// let state = Arc::new(ModeState::new(
///     Arc::new(ColorScheme::default()),
///     SystemPreference::fixed(SchemeKind::Dark),
/// ));
/// let _guard = ModeScope::enter(state);
/// assert_eq!(ModeScope::current().resolved(), SchemeKind::Dark);
/// ```
pub struct ModeScope;

impl ModeScope {
    /// Make `state` the current mode state until the guard is dropped.
    pub fn enter(state: Arc<ModeState>) -> ModeScopeGuard {
        let depth = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.push(state);
            scopes.len()
        });
        tracing::trace!(target: targets::MODE, depth, "entered mode scope");

        ModeScopeGuard {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Get the innermost mode state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoModeScope`] outside of any scope.
    pub fn try_current() -> Result<Arc<ModeState>> {
        SCOPES
            .with(|scopes| scopes.borrow().last().cloned())
            .ok_or(Error::NoModeScope)
    }

    /// Get the innermost mode state.
    ///
    /// # Panics
    ///
    /// Panics if called outside of any scope.
    pub fn current() -> Arc<ModeState> {
        match Self::try_current() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Check if a scope is active on this thread.
    pub fn is_active() -> bool {
        SCOPES.with(|scopes| !scopes.borrow().is_empty())
    }
}

/// Leaves the mode scope when dropped.
#[must_use = "the scope ends when the guard is dropped"]
pub struct ModeScopeGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ModeScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| scopes.borrow_mut().truncate(self.depth - 1));
        tracing::trace!(target: targets::MODE, depth = self.depth, "left mode scope");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{ColorMode, SystemPreference};
    use crate::theme::{ColorScheme, SchemeKind};

    fn state(system: SchemeKind) -> Arc<ModeState> {
        Arc::new(ModeState::new(
            Arc::new(ColorScheme::default()),
            SystemPreference::fixed(system),
        ))
    }

    #[test]
    fn no_scope_is_an_error() {
        assert!(!ModeScope::is_active());
        assert!(matches!(ModeScope::try_current(), Err(Error::NoModeScope)));
    }

    #[test]
    #[should_panic(expected = "ModeScope::enter()")]
    fn current_panics_outside_scope() {
        let _ = ModeScope::current();
    }

    #[test]
    fn scopes_nest() {
        let outer = state(SchemeKind::Light);
        let inner = state(SchemeKind::Dark);

        let _outer_guard = ModeScope::enter(Arc::clone(&outer));
        {
            let _inner_guard = ModeScope::enter(Arc::clone(&inner));
            assert!(Arc::ptr_eq(&ModeScope::current(), &inner));
        }
        assert!(Arc::ptr_eq(&ModeScope::current(), &outer));
    }

    #[test]
    fn guard_drop_ends_scope() {
        {
            let _guard = ModeScope::enter(state(SchemeKind::Light));
            assert!(ModeScope::is_active());
        }
        assert!(!ModeScope::is_active());
    }

    #[test]
    fn scope_sees_mode_changes() {
        let shared = state(SchemeKind::Light);
        let _guard = ModeScope::enter(Arc::clone(&shared));

        shared.set_mode(ColorMode::Dark).unwrap();
        assert_eq!(ModeScope::current().resolved(), SchemeKind::Dark);
    }

    #[test]
    fn scopes_are_per_thread() {
        let _guard = ModeScope::enter(state(SchemeKind::Light));
        let other = std::thread::spawn(ModeScope::is_active).join().unwrap();
        assert!(!other);
    }
}
