//! Server-rendered pages
//!
//! The sign-in, register and detection pages are plain HTML built with
//! `format!`. Every value that comes from a request or a user record goes
//! through `escape_html` before it is interpolated.
//!
//! ```text
//! pages/
//! ├── mod.rs      - Layout, escaping and URL helpers
//! ├── signin.rs   - GET /auth/signin
//! ├── register.rs - GET /auth/register
//! └── home.rs     - GET / (protected)
//! ```

use axum::response::Html;

pub mod home;
pub mod register;
pub mod signin;

pub const SIGNIN_PATH: &str = "/auth/signin";
pub const REGISTER_PATH: &str = "/auth/register";

const APP_TITLE: &str = "PCB Defect Detection System";

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#111827;color:#f9fafb;min-height:100vh;display:flex;flex-direction:column}\
header,footer{background:#1f2937;padding:1rem}\
header{display:flex;justify-content:space-between;align-items:center}\
h1{color:#2dd4bf;margin:0}\
h2{color:#5eead4}\
main{flex:1;padding:2rem}\
.card{background:#1f2937;padding:1.5rem;border-radius:.5rem;max-width:28rem;margin:2rem auto}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(20rem,1fr));gap:2rem}\
label{display:block;margin-top:1rem;color:#d1d5db}\
input{width:100%;box-sizing:border-box;padding:.5rem;margin-top:.25rem;background:#374151;border:1px solid #4b5563;color:#fff;border-radius:.375rem}\
button{margin-top:1.5rem;width:100%;padding:.75rem;background:#14b8a6;color:#fff;border:0;border-radius:.5rem;font-weight:bold;cursor:pointer}\
button.danger{background:#ef4444;width:auto;margin:0;padding:.5rem 1rem}\
.error{color:#ef4444}\
.message{color:#34d399}\
.preview{background:#374151;aspect-ratio:1;border-radius:.5rem;display:flex;align-items:center;justify-content:center;overflow:hidden;color:#6b7280}\
.preview img{width:100%;height:100%;object-fit:contain}\
footer p{text-align:center;color:#6b7280;font-size:.875rem}\
a{color:#2dd4bf}";

/// Escape text for an HTML body or a double-quoted attribute
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Percent-encode a query parameter value. Only RFC 3986 unreserved bytes pass through.
pub fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Post-sign-in target. Only same-site absolute paths are honoured; anything else is `/`.
pub fn safe_callback(callback: Option<&str>) -> &str {
    match callback {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

/// Wrap page content in the shared document shell
pub fn layout(title: &str, header_extra: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} | {app}</title><style>{style}</style></head><body>\
<header><h1>{app}</h1>{header_extra}</header>\
<main>{body}</main>\
<footer><p>&copy; {year} {app}. All rights reserved.</p></footer>\
</body></html>",
        title = escape_html(title),
        app = APP_TITLE,
        style = STYLE,
        header_extra = header_extra,
        body = body,
        year = chrono::Utc::now().format("%Y"),
    ))
}

/// Placeholder shown while the session status is unknown
pub fn loading_page() -> Html<String> {
    layout("Loading", "", "<div class=\"card\"><p>Loading...</p></div>")
}

/// Optional `<p>` with a CSS class, escaped
fn notice(class: &str, text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            format!("<p class=\"{}\">{}</p>", class, escape_html(text))
        }
        _ => String::new(),
    }
}
