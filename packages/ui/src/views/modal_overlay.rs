use dioxus::prelude::*;

/// A full-screen overlay that centers a titled modal card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    title: String,
    on_close: EventHandler<()>,
    /// Widen the card for dialogs with an image and comment column.
    #[props(default)]
    wide: bool,
    footer: Option<Element>,
    children: Element,
) -> Element {
    let card_class = if wide { "modal-card modal-card--wide" } else { "modal-card" };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: card_class,
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
                if let Some(footer) = footer {
                    div { class: "modal-footer", {footer} }
                }
            }
        }
    }
}
