// src/ui/toast.rs
//! Cosmetic dark-mode toggle and its toast. The theme itself never changes.

use tracing::debug;
use uuid::Uuid;

use super::controller::UiController;
use super::events::{Command, Timer};
use super::page::{ThemeIcon, ThemeToggle, Toast};

pub const PERMANENT_DARK_MODE: &str = "MARN AI is in permanent dark mode";

impl UiController {
    pub(crate) fn add_dark_mode_toggle(&mut self) {
        if self.page.theme_toggle.is_none() {
            self.page.theme_toggle = Some(ThemeToggle {
                icon: ThemeIcon::Moon,
            });
        }
    }

    pub(crate) fn theme_toggle_clicked(&mut self) -> Vec<Command> {
        let Some(toggle) = self.page.theme_toggle.as_mut() else {
            return Vec::new();
        };
        toggle.icon = toggle.icon.swapped();

        self.show_toast(PERMANENT_DARK_MODE)
    }

    /// Append a hidden toast and schedule its fade in and fade out
    pub(crate) fn show_toast(&mut self, message: &str) -> Vec<Command> {
        let id = Uuid::new_v4();
        self.page.toasts.push(Toast {
            id,
            message: message.to_string(),
            visible: false,
        });

        let timings = &self.config.timings;
        vec![
            Command::Schedule {
                after: timings.toast_fade_in(),
                timer: Timer::ToastFadeIn { toast: id },
            },
            Command::Schedule {
                after: timings.toast_hold(),
                timer: Timer::ToastFadeOut { toast: id },
            },
        ]
    }

    pub(crate) fn fade_in_toast(&mut self, id: Uuid) {
        if let Some(toast) = self.page.toast_mut(id) {
            toast.visible = true;
        }
    }

    pub(crate) fn fade_out_toast(&mut self, id: Uuid) -> Vec<Command> {
        let Some(toast) = self.page.toast_mut(id) else {
            return Vec::new();
        };
        toast.visible = false;

        vec![Command::Schedule {
            after: self.config.timings.toast_fade_out(),
            timer: Timer::ToastRemove { toast: id },
        }]
    }

    pub(crate) fn remove_toast(&mut self, id: Uuid) {
        self.page.toasts.retain(|toast| toast.id != id);
        debug!("Toast {} removed", id);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::UiConfig;
    use crate::ui::page::Page;
    use crate::ui::{templates, UiEvent};

    fn loaded() -> UiController {
        let mut controller = UiController::new(UiConfig::default(), Page::new());
        controller.update(UiEvent::DomContentLoaded);
        controller
    }

    #[test]
    fn test_toggle_injected_on_load() {
        let controller = loaded();
        assert_eq!(
            controller.page().theme_toggle,
            Some(ThemeToggle {
                icon: ThemeIcon::Moon
            })
        );
    }

    #[test]
    fn test_click_swaps_icon_and_schedules_toast() {
        let mut controller = loaded();
        let commands = controller.update(UiEvent::ThemeToggleClicked);

        assert_eq!(controller.page().theme_toggle.as_ref().unwrap().icon, ThemeIcon::Sun);
        assert_eq!(controller.page().toasts.len(), 1);

        let toast = controller.page().toasts[0].clone();
        assert_eq!(toast.message, PERMANENT_DARK_MODE);
        assert!(!toast.visible);
        assert_eq!(
            commands,
            vec![
                Command::Schedule {
                    after: Duration::from_millis(10),
                    timer: Timer::ToastFadeIn { toast: toast.id },
                },
                Command::Schedule {
                    after: Duration::from_millis(3000),
                    timer: Timer::ToastFadeOut { toast: toast.id },
                },
            ]
        );

        controller.update(UiEvent::ThemeToggleClicked);
        assert_eq!(controller.page().theme_toggle.as_ref().unwrap().icon, ThemeIcon::Moon);
        assert_eq!(controller.page().toasts.len(), 2);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut controller = loaded();
        controller.update(UiEvent::ThemeToggleClicked);
        let id = controller.page().toasts[0].id;

        controller.update(UiEvent::TimerFired(Timer::ToastFadeIn { toast: id }));
        assert!(controller.page().toasts[0].visible);

        let commands = controller.update(UiEvent::TimerFired(Timer::ToastFadeOut { toast: id }));
        assert!(!controller.page().toasts[0].visible);
        assert_eq!(
            commands,
            vec![Command::Schedule {
                after: Duration::from_millis(500),
                timer: Timer::ToastRemove { toast: id },
            }]
        );

        controller.update(UiEvent::TimerFired(Timer::ToastRemove { toast: id }));
        assert!(controller.page().toasts.is_empty());
    }

    #[test]
    fn test_rendered_toast_fades_in_and_out() {
        let mut controller = loaded();
        let toggle = controller.page().theme_toggle.clone().unwrap();
        assert!(templates::theme_toggle(&toggle).contains(r#"<i class="fas fa-moon">"#));

        controller.update(UiEvent::ThemeToggleClicked);
        let toggle = controller.page().theme_toggle.clone().unwrap();
        assert!(templates::theme_toggle(&toggle).contains(r#"<i class="fas fa-sun">"#));

        let id = controller.page().toasts[0].id;
        let rendered = |controller: &UiController| templates::toast(&controller.page().toasts[0]);
        assert!(rendered(&controller).contains("opacity: 0;"));
        assert!(rendered(&controller).contains(PERMANENT_DARK_MODE));

        controller.update(UiEvent::TimerFired(Timer::ToastFadeIn { toast: id }));
        assert!(rendered(&controller).contains("opacity: 1;"));

        controller.update(UiEvent::TimerFired(Timer::ToastFadeOut { toast: id }));
        assert!(rendered(&controller).contains("opacity: 0;"));
    }

    #[test]
    fn test_click_without_toggle_is_ignored() {
        let mut controller = UiController::new(UiConfig::default(), Page::new());
        assert!(controller.update(UiEvent::ThemeToggleClicked).is_empty());
        assert!(controller.page().toasts.is_empty());
    }
}
