// src/api/http/page.rs
// Server-rendered form page

use crate::pipeline::SupportReply;

/// What to show below the form
pub enum PageView<'a> {
    Empty,
    Warning(&'a str),
    Reply { input: &'a str, reply: &'a SupportReply },
}

/// Minimal HTML escaping for text and attribute content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_page(assistant_name: &str, view: PageView<'_>) -> String {
    let name = escape_html(assistant_name);

    let (input, result) = match view {
        PageView::Empty => (String::new(), String::new()),
        PageView::Warning(message) => (
            String::new(),
            format!(r#"<p class="warning">{}</p>"#, escape_html(message)),
        ),
        PageView::Reply { input, reply } => (
            escape_html(input),
            format!(
                concat!(
                    r#"<aside class="intent">Detected Intent: <strong>{intent}</strong></aside>"#,
                    "\n",
                    r#"<h2>{name}'s Response:</h2>"#,
                    "\n",
                    r#"<div class="response">{response}</div>"#
                ),
                intent = escape_html(&reply.intent.as_str().to_uppercase()),
                name = name,
                response = escape_html(&reply.response),
            ),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{name}: AI Therapy</title>
<style>
body {{ max-width: 42rem; margin: 2rem auto; font-family: sans-serif; }}
textarea {{ width: 100%; height: 100px; }}
.warning {{ background: #fff3cd; padding: 0.75rem; }}
.intent {{ background: #d1e7dd; padding: 0.75rem; }}
.response {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>{name}: Mental Health Assistant</h1>
<p>A Hybrid AI System: <strong>Machine Learning</strong> (Intent) + <strong>Generative AI</strong> (Response)</p>
<form method="post" action="/">
<label for="message">How are you feeling right now?</label>
<textarea id="message" name="message">{input}</textarea>
<button type="submit">Get Support</button>
</form>
{result}
</body>
</html>
"#
    )
}
