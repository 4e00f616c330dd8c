use tracing::trace;

/// Expanded/collapsed state of the mobile navigation panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the panel and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        trace!("menu toggled: open={}", self.open);
        self.open
    }

    /// Collapses the panel. Returns true when it was open before.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        if was_open {
            trace!("menu closed");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::MenuToggle;

    #[test]
    fn starts_closed() {
        assert!(!MenuToggle::new().is_open());
    }

    #[test]
    fn toggle_pairs_cancel_out() {
        let mut menu = MenuToggle::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());

        for i in 1..=7 {
            menu.toggle();
            assert_eq!(menu.is_open(), i % 2 == 1);
        }
    }

    #[test]
    fn close_always_collapses() {
        let mut menu = MenuToggle::new();
        assert!(!menu.close());
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());

        assert!(!menu.close());
        assert!(!menu.is_open());
    }
}
