use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; background: #f7f7fb; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
header .updated { margin-left: auto; font-size: 0.85rem; color: #666; }
main { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
.stats { display: flex; gap: 2rem; margin-bottom: 1.5rem; }
.stats strong { display: block; font-size: 1.4rem; }
.properties { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.property-card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.1); overflow: hidden; }
.property-image { font-size: 3rem; text-align: center; padding: 1rem; background: #eef; }
.property-details { padding: 1rem; }
.property-price { font-size: 1.3rem; font-weight: 700; }
.property-features { display: flex; gap: 1rem; margin: 0.5rem 0; }
.agent-info { font-size: 0.85rem; margin: 0.5rem 0; }
.property-meta { display: flex; justify-content: space-between; font-size: 0.8rem; color: #666; }
.no-results { text-align: center; padding: 3rem; color: #666; }
"#;

pub fn desktop_layout(title: &str, last_updated: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
              header {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { (title) }
                  span class="updated" { "Last updated: " (last_updated) }
              }
              main { (content) }
            }
        }
    }
}
