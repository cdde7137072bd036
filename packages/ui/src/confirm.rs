//! Confirmation before destructive actions.
//!
//! The confirm button stays disabled until [`CONFIRM_DELAY`] has passed since
//! the dialog appeared, with a visible countdown in its label.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::timer::sleep;
use crate::views::ModalOverlay;

pub const CONFIRM_DELAY: Duration = Duration::from_secs(2);

const TICK: Duration = Duration::from_secs(1);

/// Elapsed-time gate for the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmGate {
    delay: Duration,
    elapsed: Duration,
}

impl Default for ConfirmGate {
    fn default() -> Self {
        Self::new(CONFIRM_DELAY)
    }
}

impl ConfirmGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.elapsed = self.elapsed.saturating_add(by);
    }

    pub fn is_armed(&self) -> bool {
        self.elapsed >= self.delay
    }

    /// Whole seconds left, rounded up. Zero once armed.
    pub fn seconds_left(&self) -> u64 {
        let remaining = self.delay.saturating_sub(self.elapsed);
        remaining.as_millis().div_ceil(1000) as u64
    }

    pub fn label(&self) -> String {
        match self.seconds_left() {
            0 => "Confirm".to_string(),
            n => format!("Confirm ({n})"),
        }
    }
}

/// Modal asking the user to confirm. Mount it to show it; the countdown
/// starts on mount.
#[component]
pub fn ConfirmationDialog(
    title: String,
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut gate = use_signal(ConfirmGate::default);

    use_future(move || async move {
        while !gate.peek().is_armed() {
            sleep(TICK).await;
            gate.write().advance(TICK);
        }
    });

    let armed = gate.read().is_armed();
    let label = gate.read().label();

    rsx! {
        ModalOverlay {
            title,
            on_close: move |_| on_cancel.call(()),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: !armed,
                    onclick: move |_| on_confirm.call(()),
                    "{label}"
                }
            },
            p { "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_until_two_seconds() {
        let mut gate = ConfirmGate::default();
        assert!(!gate.is_armed());
        assert_eq!(gate.label(), "Confirm (2)");

        gate.advance(Duration::from_millis(1999));
        assert!(!gate.is_armed());
        assert_eq!(gate.seconds_left(), 1);

        gate.advance(Duration::from_millis(1));
        assert!(gate.is_armed());
        assert_eq!(gate.label(), "Confirm");
    }

    #[test]
    fn test_one_second_ticks() {
        let mut gate = ConfirmGate::default();
        gate.advance(TICK);
        assert_eq!(gate.label(), "Confirm (1)");
        assert!(!gate.is_armed());
        gate.advance(TICK);
        assert!(gate.is_armed());
        assert_eq!(gate.seconds_left(), 0);
    }

    #[test]
    fn test_stays_armed() {
        let mut gate = ConfirmGate::new(Duration::from_secs(2));
        gate.advance(Duration::from_secs(10));
        gate.advance(Duration::MAX);
        assert!(gate.is_armed());
    }
}
