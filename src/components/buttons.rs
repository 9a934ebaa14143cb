use dioxus::prelude::*;

#[component]
pub fn Button(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            onclick: move |evt| onclick.call(evt),
            "Click me"
        }
    }
}
