#![allow(non_snake_case)]

use crate::components::Button;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

pub fn App() -> Element {
    // Click handler for the demo shell
    let handle_click = move |_: MouseEvent| {
        info!("click handler executed");
    };

    rsx! {
        Button { onclick: handle_click }
    }
}
