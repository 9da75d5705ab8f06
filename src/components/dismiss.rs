//! One-shot dismiss state
//!
//! Banner and Tag share the same visibility contract: shown until the close
//! affordance is activated, then hidden for the rest of the instance's life.
//! The transition is terminal; remounting the component is the only way back.

/// Terminal visibility state for dismissible components
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DismissState {
    /// Rendering normally
    #[default]
    Shown,
    /// Dismissed; the component renders nothing
    Hidden,
}

impl DismissState {
    /// Transition to `Hidden`. Returns `true` only on the first call, which
    /// gates one-shot close callbacks.
    pub fn dismiss(&mut self) -> bool {
        match self {
            Self::Shown => {
                *self = Self::Hidden;
                true
            }
            Self::Hidden => false,
        }
    }

    /// Whether the component has been dismissed
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_is_one_shot() {
        let mut state = DismissState::default();
        assert!(!state.is_hidden());
        assert!(state.dismiss());
        assert!(state.is_hidden());
    }

    #[test]
    fn test_dismiss_is_terminal_and_idempotent() {
        let mut state = DismissState::default();
        assert!(state.dismiss());
        assert!(!state.dismiss());
        assert!(!state.dismiss());
        assert!(state.is_hidden());
    }
}
