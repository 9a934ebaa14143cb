use button_ui::app::App;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    // Init panic hook so handler panics land in the browser console
    console_error_panic_hook::set_once();

    launch(App);
}
