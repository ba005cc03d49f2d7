//! Yes/no confirmation dialog.

use dioxus::prelude::*;

/// Props for ConfirmDialog component.
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    /// Question shown to the user.
    pub message: String,
    #[props(default = "Delete".to_string())]
    pub confirm_label: String,
    /// Callback when the user confirms.
    pub on_confirm: EventHandler<()>,
    /// Callback when the user backs out.
    pub on_cancel: EventHandler<()>,
}

/// Modal asking the user to confirm a destructive action.
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            onclick: move |_| props.on_cancel.call(()),

            div { class: "modal confirm-dialog",
                onclick: move |e| e.stop_propagation(),

                p { class: "confirm-message", "{props.message}" }
                div { class: "form-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| props.on_confirm.call(()),
                        "{props.confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
