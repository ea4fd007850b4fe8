//! Server-rendered home page.

use std::fmt::Write;

use service::isme::IsMe;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the list page. Element ids are what the browser script and
/// the UI tests look up: `this-is-me-name`, `this-is-me-button`,
/// `name-<name>` and `remove-me-<name>`.
pub fn render_home(folks_who_are_me: &[IsMe]) -> String {
    let mut items = String::new();
    for me in folks_who_are_me {
        let name = escape_html(&me.name);
        // writing into a String cannot fail
        let _ = write!(
            items,
            r#"
      <li>
        <span id="name-{name}">{name}</span>
        <button id="remove-me-{name}" class="remove-me" data-name="{name}">That is not me</button>
      </li>"#
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Is Me</title>
  </head>
  <body>
    <h1>Folks who are Ryan Gosling</h1>
    <ul id="folks-who-are-me">{items}
    </ul>
    <form>
      <input id="this-is-me-name" type="text" placeholder="Your name">
      <button id="this-is-me-button" type="submit">That is me</button>
    </form>
    <script src="/js/lib/home.js"></script>
  </body>
</html>
"#
    )
}
