//! Состояние списка вкладок (tablist) для секции «Where I've Worked».
//!
//! Два независимых курсора над кольцом из `len` вкладок:
//! - `active` — какая панель показана (меняется только через `activate`)
//! - `focus` — какая вкладка должна получить фокус клавиатуры (меняется стрелками)
//!
//! Модуль не знает ничего о DOM: перемещение фокуса возвращается наружу как
//! [`FocusCommand`], а рендерер сам вызывает `.focus()` на нужном элементе.

use thiserror::Error;

pub const KEY_ARROW_UP: &str = "ArrowUp";
pub const KEY_ARROW_DOWN: &str = "ArrowDown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("tab index {index} is out of range (tab count {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Relative step of the focus cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    Next,
    Previous,
}

impl FocusStep {
    /// Maps a `KeyboardEvent.key` value to a step. Only the vertical arrows move focus.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            KEY_ARROW_DOWN => Some(FocusStep::Next),
            KEY_ARROW_UP => Some(FocusStep::Previous),
            _ => None,
        }
    }
}

/// Side effect requested by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCommand {
    /// Move input focus to the tab button with this index.
    MoveTo(usize),
}

impl FocusCommand {
    pub fn index(&self) -> usize {
        match self {
            FocusCommand::MoveTo(index) => *index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector {
    len: usize,
    active: usize,
    focus: Option<usize>,
}

impl TabSelector {
    /// Returns `None` for an empty job list: there is nothing to select.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            active: 0,
            focus: None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Roving tabindex: only the active tab is reachable with Tab.
    pub fn tab_index(&self, index: usize) -> i32 {
        if self.is_active(index) {
            0
        } else {
            -1
        }
    }

    /// Absolute jump of the active panel. Focus is left where it is.
    pub fn activate(&mut self, index: usize) -> Result<(), TabError> {
        self.check(index)?;
        if self.active != index {
            log::debug!("tabs: activate {} -> {}", self.active, index);
        }
        self.active = index;
        Ok(())
    }

    /// Relative cyclic step of the focus cursor. Never activates.
    pub fn move_focus(&mut self, step: FocusStep) -> FocusCommand {
        // Unset focus behaves like index 0: Next lands on 1, Previous wraps to the end.
        let current = self.focus.unwrap_or(0);
        let next = match step {
            FocusStep::Next => {
                if current + 1 >= self.len {
                    0
                } else {
                    current + 1
                }
            }
            FocusStep::Previous => {
                if current == 0 {
                    self.len - 1
                } else {
                    current - 1
                }
            }
        };
        self.focus = Some(next);
        FocusCommand::MoveTo(next)
    }

    /// Places the focus cursor on a specific tab.
    pub fn focus_on(&mut self, index: usize) -> Result<FocusCommand, TabError> {
        self.check(index)?;
        self.focus = Some(index);
        Ok(FocusCommand::MoveTo(index))
    }

    fn check(&self, index: usize) -> Result<(), TabError> {
        if index >= self.len {
            return Err(TabError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_first_tab_without_focus() {
        let tabs = TabSelector::new(3).unwrap();
        assert_eq!(tabs.active(), 0);
        assert_eq!(tabs.focus(), None);
        assert_eq!(tabs.len(), 3);
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(TabSelector::new(0).is_none());
    }

    #[test]
    fn test_activate_every_index() {
        for len in 1..6 {
            let mut tabs = TabSelector::new(len).unwrap();
            for i in 0..len {
                assert_eq!(tabs.activate(i), Ok(()));
                assert_eq!(tabs.active(), i);
            }
        }
    }

    #[test]
    fn test_activate_out_of_range_keeps_state() {
        let mut tabs = TabSelector::new(3).unwrap();
        tabs.activate(1).unwrap();
        assert_eq!(
            tabs.activate(3),
            Err(TabError::OutOfRange { index: 3, len: 3 })
        );
        assert!(tabs.activate(usize::MAX).is_err());
        assert_eq!(tabs.active(), 1);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut once = TabSelector::new(4).unwrap();
        once.activate(2).unwrap();
        let mut twice = TabSelector::new(4).unwrap();
        twice.activate(2).unwrap();
        twice.activate(2).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_move_focus_wraps_forward() {
        for len in 1..6 {
            let mut tabs = TabSelector::new(len).unwrap();
            tabs.focus_on(len - 1).unwrap();
            assert_eq!(tabs.move_focus(FocusStep::Next), FocusCommand::MoveTo(0));
            assert_eq!(tabs.focus(), Some(0));
        }
    }

    #[test]
    fn test_move_focus_wraps_backward() {
        for len in 1..6 {
            let mut tabs = TabSelector::new(len).unwrap();
            tabs.focus_on(0).unwrap();
            assert_eq!(
                tabs.move_focus(FocusStep::Previous),
                FocusCommand::MoveTo(len - 1)
            );
            assert_eq!(tabs.focus(), Some(len - 1));
        }
    }

    #[test]
    fn test_move_focus_from_unset() {
        let mut tabs = TabSelector::new(3).unwrap();
        assert_eq!(tabs.move_focus(FocusStep::Next), FocusCommand::MoveTo(1));

        let mut tabs = TabSelector::new(3).unwrap();
        assert_eq!(tabs.move_focus(FocusStep::Previous), FocusCommand::MoveTo(2));
    }

    #[test]
    fn test_single_tab_ring_is_fixed_point() {
        let mut tabs = TabSelector::new(1).unwrap();
        tabs.focus_on(0).unwrap();
        assert_eq!(tabs.move_focus(FocusStep::Next), FocusCommand::MoveTo(0));
        assert_eq!(tabs.move_focus(FocusStep::Previous), FocusCommand::MoveTo(0));
        assert_eq!(tabs.focus(), Some(0));
    }

    #[test]
    fn test_focus_and_activation_are_independent() {
        let mut tabs = TabSelector::new(3).unwrap();
        tabs.focus_on(0).unwrap();

        assert_eq!(tabs.move_focus(FocusStep::Next).index(), 1);
        assert_eq!(tabs.move_focus(FocusStep::Next).index(), 2);
        assert_eq!(tabs.move_focus(FocusStep::Next).index(), 0);
        // Arrow keys never change the visible panel.
        assert_eq!(tabs.active(), 0);

        tabs.activate(2).unwrap();
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.focus(), Some(0));
    }

    #[test]
    fn test_focus_on_out_of_range() {
        let mut tabs = TabSelector::new(2).unwrap();
        assert!(tabs.focus_on(2).is_err());
        assert_eq!(tabs.focus(), None);
    }

    #[test]
    fn test_roving_tab_index() {
        let mut tabs = TabSelector::new(3).unwrap();
        tabs.activate(1).unwrap();
        assert_eq!(tabs.tab_index(0), -1);
        assert_eq!(tabs.tab_index(1), 0);
        assert_eq!(tabs.tab_index(2), -1);
    }

    #[test]
    fn test_focus_step_from_key() {
        assert_eq!(FocusStep::from_key("ArrowDown"), Some(FocusStep::Next));
        assert_eq!(FocusStep::from_key("ArrowUp"), Some(FocusStep::Previous));
        assert_eq!(FocusStep::from_key("ArrowLeft"), None);
        assert_eq!(FocusStep::from_key("Enter"), None);
    }
}
