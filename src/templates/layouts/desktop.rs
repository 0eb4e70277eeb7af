use maud::{html, Markup, PreEscaped, DOCTYPE};

// The grid swaps over htmx; while a request is pending the real grid is
// hidden and the placeholder cells take its place.
const PENDING_CSS: &str = r#"
.pending-skeletons { display: none; }
#listings.htmx-request .pending-skeletons { display: grid; }
#listings.htmx-request #listing-grid { display: none; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                script type="module" src="https://unpkg.com/@splinetool/viewer/build/spline-viewer.js" {}
                style { (PreEscaped(PENDING_CSS)) }
            }
            body class="min-h-screen bg-black text-white" {
                (content)
                footer class="border-t border-white/10 py-10 text-center text-zinc-400" {
                    "Built for modern getaways • Dark theme • Minimal & elegant"
                }
            }
        }
    }
}
