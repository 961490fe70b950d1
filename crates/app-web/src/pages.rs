//! Server-rendered pages.
//!
//! One informational page: a fixed panel with quick links, a disabled
//! textarea holding the serialized session when one exists, and an empty
//! panel reserved for resources.

/// Render the starter page.
///
/// `session_json` is the compact serialization of the session handle, or
/// `None` when no session has been established; in that case the textarea is
/// omitted entirely.
pub fn index(session_json: Option<&str>) -> String {
    let session_area = match session_json {
        Some(json) => format!(
            "<textarea rows=\"20\" disabled>{}</textarea>",
            escape_html(json)
        ),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <title>FHIR App Starter</title>
    <style>
      .container {{ display: flex; margin: 2rem; justify-content: center; }}
      .box {{ padding: 5px; flex: 1; }}
      textarea {{ width: 100%; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="box">
        <h1>FHIR App Starter</h1>
        <p>Quick links:</p>
        <ul>
          <li><a href="https://launch.smarthealthit.org">Simulate an EHR launch</a></li>
          <li><a href="http://hl7.org/fhir/smart-app-launch/">SMART on FHIR HL7 documentation</a></li>
        </ul>
        {session_area}
      </div>
      <div class="box">
      </div>
    </div>
  </body>
</html>
"#
    )
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
