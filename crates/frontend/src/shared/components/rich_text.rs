//! Minimal rich text editor over a `contenteditable` element.
//!
//! The markup is pushed into the element only when `revision` changes, i.e.
//! when the owner replaced the content (load, reset). While the user types,
//! the element is the source of truth and changes flow out via `on_input`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Toolbar entries: label, `execCommand` name, command value
const COMMANDS: [(&str, &str, &str); 5] = [
    ("B", "bold", ""),
    ("I", "italic", ""),
    ("U", "underline", ""),
    ("H2", "formatBlock", "h2"),
    ("•", "insertUnorderedList", ""),
];

fn exec(command: &str, value: &str) {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
    if let Some(document) = document {
        if let Err(e) = document.exec_command_with_show_ui_and_value(command, false, value) {
            log::warn!("execCommand {} failed: {:?}", command, e);
        }
    }
}

#[component]
pub fn RichTextEditor(
    /// Current markup, read when `revision` changes
    #[prop(into)]
    content: Signal<String>,
    #[prop(into)] revision: Signal<u64>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let editor_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        revision.track();
        if let Some(editor) = editor_ref.get() {
            editor.set_inner_html(&content.get_untracked());
        }
    });

    let emit = move || {
        if let Some(editor) = editor_ref.get_untracked() {
            on_input.run(editor.inner_html());
        }
    };

    view! {
        <div class="rich-text">
            <div class="rich-text__toolbar">
                {COMMANDS
                    .iter()
                    .map(|&(label, command, value)| {
                        view! {
                            <button
                                type="button"
                                class="rich-text__button"
                                on:mousedown=|ev| ev.prevent_default()
                                on:click=move |_| {
                                    exec(command, value);
                                    emit();
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="rich-text__body"
                contenteditable="true"
                data-placeholder=placeholder
                node_ref=editor_ref
                on:input=move |_| emit()
            ></div>
        </div>
    }
}
