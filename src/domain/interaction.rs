/// Which plot point is highlighted, shared by the plot, its tooltip and the
/// table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

impl HoverState {
    pub fn index(&self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(i) => Some(*i),
        }
    }

    /// Set or clear the highlight. An index outside `[0, len)` clears it.
    /// Returns true if the state changed.
    pub fn set(&mut self, index: Option<usize>, len: usize) -> bool {
        let next = match index {
            Some(i) if i < len => HoverState::Hovering(i),
            _ => HoverState::Idle,
        };
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set(None, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave() {
        let mut hover = HoverState::default();
        assert!(hover.set(Some(2), 3));
        assert_eq!(hover, HoverState::Hovering(2));
        assert!(!hover.set(Some(2), 3));
        assert!(hover.clear());
        assert_eq!(hover.index(), None);
    }

    #[test]
    fn out_of_bounds_index_clears() {
        let mut hover = HoverState::Hovering(1);
        assert!(hover.set(Some(3), 3));
        assert_eq!(hover, HoverState::Idle);
    }
}
