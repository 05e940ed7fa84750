//! Detection page
//!
//! Only reachable through the page guard. Results are rendered in the
//! browser from the `POST /api/detect` JSON response.

use axum::response::Html;

use super::{escape_html, layout};
use crate::shared::session::SessionUser;

const SIGNOUT_ACTION: &str = "/api/auth/signout";

const DETECT_SCRIPT: &str = r#"
const input = document.getElementById('fileInput');
const drop = document.getElementById('dropZone');
const button = document.getElementById('detectButton');
const errorBox = document.getElementById('error');
const summary = document.getElementById('summary');
let selected = null;

function show(el, node) { el.replaceChildren(node); }
function placeholder(text) { const p = document.createElement('p'); p.textContent = text; return p; }
function image(src, alt) { const img = document.createElement('img'); img.src = src; img.alt = alt; return img; }

function choose(file) {
  if (!file || !file.type.startsWith('image/')) return;
  selected = file;
  show(document.getElementById('original'), image(URL.createObjectURL(file), 'Original PCB'));
  show(document.getElementById('detected'), placeholder('Result'));
  errorBox.textContent = '';
  summary.replaceChildren();
}

drop.addEventListener('click', () => input.click());
drop.addEventListener('dragover', (e) => e.preventDefault());
drop.addEventListener('drop', (e) => { e.preventDefault(); choose(e.dataTransfer.files[0]); });
input.addEventListener('change', () => choose(input.files[0]));

button.addEventListener('click', async () => {
  if (!selected) { errorBox.textContent = 'Error: Please select an image file first.'; return; }
  button.disabled = true;
  button.textContent = 'Detecting...';
  errorBox.textContent = '';
  summary.replaceChildren();
  const form = new FormData();
  form.append('image', selected);
  try {
    const response = await fetch('/api/detect', { method: 'POST', body: form });
    if (response.status === 401) { window.location.href = '/auth/signin?callbackUrl=%2F'; return; }
    if (!response.ok) throw new Error('Error: ' + response.statusText);
    const result = await response.json();
    show(document.getElementById('detected'), image(result.detectedImage, 'Detected Defects'));
    const title = document.createElement('h3');
    title.textContent = 'Detection Summary';
    const time = document.createElement('p');
    time.textContent = 'Processing Time: ' + result.processingTime.toFixed(2) + ' seconds';
    summary.append(title, time);
    if (result.defects.length === 0) {
      summary.append(placeholder('No defects found.'));
    } else {
      const list = document.createElement('ul');
      for (const defect of result.defects) {
        const item = document.createElement('li');
        item.textContent = '- ' + defect.type + ' (Confidence: ' + (defect.confidence * 100).toFixed(1) + '%)';
        list.append(item);
      }
      summary.append(list);
    }
  } catch (err) {
    errorBox.textContent = 'Error: ' + (err.message || 'An unknown error occurred.');
  } finally {
    button.disabled = false;
    button.textContent = 'Upload & Detect';
  }
});
"#;

/// `GET /`
pub async fn home_page(user: SessionUser) -> Html<String> {
    render_home_page(&user)
}

pub fn render_home_page(user: &SessionUser) -> Html<String> {
    let header = format!(
        "<div style=\"display:flex;align-items:center;gap:1rem\">\
<p>Welcome, {}</p>\
<form method=\"post\" action=\"{}\"><button type=\"submit\" class=\"danger\">Sign Out</button></form></div>",
        escape_html(&user.username),
        SIGNOUT_ACTION,
    );

    let body = format!(
        "<div class=\"grid\">\
<section class=\"card\" style=\"max-width:none;margin:0\"><h2>Upload PCB Image</h2>\
<div id=\"dropZone\" style=\"border:2px dashed #4b5563;border-radius:.5rem;padding:2.5rem;text-align:center;cursor:pointer\">\
<p>Drag &amp; drop your image here, or click to select</p>\
<input type=\"file\" id=\"fileInput\" accept=\"image/*\" hidden></div>\
<button id=\"detectButton\" type=\"button\">Upload &amp; Detect</button></section>\
<section class=\"card\" style=\"max-width:none;margin:0\"><h2>Detection Result</h2>\
<div class=\"grid\" style=\"grid-template-columns:1fr 1fr;gap:1rem\">\
<div><h3>Original Image</h3><div id=\"original\" class=\"preview\"><p>Preview</p></div></div>\
<div><h3>Detected Defects</h3><div id=\"detected\" class=\"preview\"><p>Result</p></div></div></div>\
<p id=\"error\" class=\"error\"></p><div id=\"summary\"></div></section></div>\
<script>{}</script>",
        DETECT_SCRIPT
    );

    layout("Detect", &header, &body)
}
