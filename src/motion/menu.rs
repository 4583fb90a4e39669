#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    Escape,
    ScrollDown,
    OutsideClick,
    ItemSelected,
}

impl MenuEvent {
    /// Maps a `KeyboardEvent::key()` value; only Escape closes the menu.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(MenuEvent::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenuState {
    pub is_open: bool,
}

impl MobileMenuState {
    pub fn apply(self, event: MenuEvent) -> Self {
        let is_open = match event {
            MenuEvent::Toggle => !self.is_open,
            MenuEvent::Escape
            | MenuEvent::ScrollDown
            | MenuEvent::OutsideClick
            | MenuEvent::ItemSelected => false,
        };
        Self { is_open }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.is_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: MobileMenuState = MobileMenuState { is_open: true };
    const CLOSED: MobileMenuState = MobileMenuState { is_open: false };

    #[test]
    fn hamburger_toggles() {
        assert_eq!(CLOSED.apply(MenuEvent::Toggle), OPEN);
        assert_eq!(OPEN.apply(MenuEvent::Toggle), CLOSED);
    }

    #[test]
    fn escape_closes_and_is_harmless_when_closed() {
        assert_eq!(OPEN.apply(MenuEvent::Escape), CLOSED);
        assert_eq!(CLOSED.apply(MenuEvent::Escape), CLOSED);
    }

    #[test]
    fn every_dismissal_closes() {
        for event in [
            MenuEvent::ScrollDown,
            MenuEvent::OutsideClick,
            MenuEvent::ItemSelected,
        ] {
            assert_eq!(OPEN.apply(event), CLOSED, "{event:?}");
            assert_eq!(CLOSED.apply(event), CLOSED, "{event:?}");
        }
    }

    #[test]
    fn only_escape_key_is_mapped() {
        assert_eq!(MenuEvent::from_key("Escape"), Some(MenuEvent::Escape));
        assert_eq!(MenuEvent::from_key("Enter"), None);
        assert_eq!(MenuEvent::from_key("Esc"), None);
    }
}
