//! Root application component

use dioxus::prelude::*;

use crate::auth::SessionProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        document::Title { "Noor Academy" }

        // Session context wraps the entire app
        SessionProvider {
            Router::<Route> {}
        }
    }
}
