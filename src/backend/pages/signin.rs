//! Sign-in page

use axum::{extract::Query, response::Html};
use serde::Deserialize;

use super::{escape_html, layout, notice, safe_callback, REGISTER_PATH, SIGNIN_PATH};

#[derive(Debug, Default, Deserialize)]
pub struct SignInQuery {
    pub message: Option<String>,
    pub error: Option<String>,
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// `GET /auth/signin`
pub async fn signin_page(Query(query): Query<SignInQuery>) -> Html<String> {
    render_signin_page(&query)
}

pub fn render_signin_page(query: &SignInQuery) -> Html<String> {
    let callback = safe_callback(query.callback_url.as_deref());

    let body = format!(
        "<div class=\"card\"><h2>Sign In</h2>{message}{error}\
<form method=\"post\" action=\"{action}\">\
<input type=\"hidden\" name=\"callbackUrl\" value=\"{callback}\">\
<label for=\"username\">Username</label>\
<input id=\"username\" name=\"username\" type=\"text\" autocomplete=\"username\" required>\
<label for=\"password\">Password</label>\
<input id=\"password\" name=\"password\" type=\"password\" autocomplete=\"current-password\" required>\
<button type=\"submit\">Sign In</button></form>\
<p>No account? <a href=\"{register}\">Register</a></p></div>",
        message = notice("message", query.message.as_deref()),
        error = notice("error", query.error.as_deref()),
        action = SIGNIN_PATH,
        callback = escape_html(callback),
        register = REGISTER_PATH,
    );

    layout("Sign In", "", &body)
}
