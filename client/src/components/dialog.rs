//! Modal dialog shell and a yes/no confirmation built on it.

use leptos::prelude::*;

/// Backdrop + card with a title bar. Escape or a backdrop click closes it.
#[component]
pub fn Dialog(#[prop(into)] title: Signal<String>, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}

/// Confirmation prompt with a destructive confirm button.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog title=title on_close=on_cancel>
            <p class="dialog__message">{move || message.get()}</p>
            <div class="dialog__actions">
                <button class="btn btn--ghost" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label}
                </button>
            </div>
        </Dialog>
    }
}
