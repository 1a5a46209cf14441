pub const MENU_OPTIONS: &[&str] = &["Start Game", "Exit"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    Exit,
}

/// Highlighted entry of `MENU_OPTIONS`. Navigation wraps around.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &'static [&'static str] {
        MENU_OPTIONS
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MENU_OPTIONS.len();
    }

    pub fn previous(&mut self) {
        self.selected = (self.selected + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len();
    }

    pub fn confirm(&self) -> MenuAction {
        match self.selected {
            0 => MenuAction::StartGame,
            _ => MenuAction::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        let mut menu = Menu::new();

        menu.next();
        assert_eq!(menu.selected(), 1);
        menu.next();
        assert_eq!(menu.selected(), 0);

        menu.previous();
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn confirm_maps_labels_to_actions() {
        let mut menu = Menu::new();
        assert_eq!(menu.options()[menu.selected()], "Start Game");
        assert_eq!(menu.confirm(), MenuAction::StartGame);

        menu.next();
        assert_eq!(menu.options()[menu.selected()], "Exit");
        assert_eq!(menu.confirm(), MenuAction::Exit);
    }
}
