//! Registration page

use axum::response::Html;

use super::{escape_html, layout, notice, REGISTER_PATH, SIGNIN_PATH};

/// `GET /auth/register`
pub async fn register_page() -> Html<String> {
    render_register_page(None, "", "")
}

/// Render the form, optionally with an error and the values to keep
pub fn render_register_page(error: Option<&str>, username: &str, email: &str) -> Html<String> {
    let body = format!(
        "<div class=\"card\"><h2>Register</h2>{error}\
<form method=\"post\" action=\"{action}\">\
<label for=\"username\">Username</label>\
<input id=\"username\" name=\"username\" type=\"text\" autocomplete=\"username\" required value=\"{username}\">\
<label for=\"email\">Email</label>\
<input id=\"email\" name=\"email\" type=\"email\" autocomplete=\"email\" required value=\"{email}\">\
<label for=\"password\">Password</label>\
<input id=\"password\" name=\"password\" type=\"password\" autocomplete=\"new-password\" required>\
<label for=\"confirm_password\">Confirm Password</label>\
<input id=\"confirm_password\" name=\"confirm_password\" type=\"password\" autocomplete=\"new-password\" required>\
<button type=\"submit\">Register</button></form>\
<p>Already registered? <a href=\"{signin}\">Sign in</a></p></div>",
        error = notice("error", error),
        action = REGISTER_PATH,
        username = escape_html(username),
        email = escape_html(email),
        signin = SIGNIN_PATH,
    );

    layout("Register", "", &body)
}
