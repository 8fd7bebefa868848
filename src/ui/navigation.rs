// src/ui/navigation.rs
use tracing::trace;

use super::controller::UiController;

impl UiController {
    /// Show or hide the mobile menu panel
    pub(crate) fn toggle_menu(&mut self) {
        match self.page.nav.as_mut() {
            Some(menu) => menu.hidden = !menu.hidden,
            None => trace!("No mobile menu on this page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::ui::{Page, UiController, UiEvent};

    #[test]
    fn test_menu_toggles_back_and_forth() {
        let mut controller = UiController::new(UiConfig::default(), Page::new().with_nav());
        assert!(controller.page().nav.as_ref().unwrap().hidden);

        controller.update(UiEvent::MenuButtonClicked);
        assert!(!controller.page().nav.as_ref().unwrap().hidden);

        controller.update(UiEvent::MenuButtonClicked);
        assert!(controller.page().nav.as_ref().unwrap().hidden);
    }

    #[test]
    fn test_menu_click_without_menu_is_ignored() {
        let mut controller = UiController::new(UiConfig::default(), Page::new());
        assert!(controller.update(UiEvent::MenuButtonClicked).is_empty());
        assert!(controller.page().nav.is_none());
    }
}
