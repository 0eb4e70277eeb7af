use maud::{html, Markup, DOCTYPE};

/// Standalone page for request-level errors (404, 405, ...).
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}

/// Banner shown above the grid when the last listing fetch failed.
pub fn fetch_alert(message: &str) -> Markup {
    html! {
        div
            class="fetch-alert mb-6 rounded-xl border border-red-500/30 bg-red-950/40 px-4 py-3 text-sm text-red-200"
            role="alert"
        {
            strong { "Couldn't load stays. " }
            "Showing the last results we had. "
            span class="text-red-300/70" { (message) }
        }
    }
}
