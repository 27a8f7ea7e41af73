//! Redirect document rendering.

use crate::utils::html::escape;

/// Tag identifying a document as generator output.
///
/// Reconciliation only deletes directories whose index document carries
/// this tag together with the refresh directive, so hand-written pages
/// are never removed. Changing this string orphans previously generated
/// pages.
pub const GENERATOR_MARK: &str = r#"<meta name="generator" content="slink">"#;

/// Refresh directive every generated page carries.
pub const REFRESH_MARK: &str = r#"meta http-equiv="refresh""#;

/// Render the redirect document for one entry.
///
/// The page redirects three ways: a zero-delay refresh directive, a
/// script-driven `location.replace` (keeps the shortlink out of the back
/// stack), and a visible fallback link for clients with neither. All
/// interpolations are HTML-escaped; the script payload uses JSON string
/// encoding instead, since it needs JS semantics rather than entities.
pub fn render_redirect_page(url: &str, slug: &str, site_name: &str) -> String {
    let escaped_url = escape(url);
    let js_url = serde_json::Value::String(url.to_string()).to_string();
    let display_name = escape(if slug.is_empty() { site_name } else { slug });
    let brand = escape(site_name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {GENERATOR_MARK}
    <meta http-equiv="refresh" content="0; url={escaped_url}">
    <link rel="canonical" href="{escaped_url}">
    <title>Redirecting to {escaped_url}</title>

    <!-- Open Graph / Social Media -->
    <meta property="og:title" content="{display_name} - {brand} shortlink">
    <meta property="og:description" content="Redirecting to {escaped_url}">
    <meta property="og:type" content="website">
    <meta property="og:url" content="{escaped_url}">

    <!-- Twitter Card -->
    <meta name="twitter:card" content="summary">
    <meta name="twitter:title" content="{display_name} - {brand} shortlink">
    <meta name="twitter:description" content="Redirecting to {escaped_url}">

    <style>
      body {{
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        display: flex;
        justify-content: center;
        align-items: center;
        height: 100vh;
        margin: 0;
        background: #f5f5f5;
        color: #333;
      }}
      .container {{
        text-align: center;
        padding: 2rem;
      }}
      a {{
        color: #3498db;
        text-decoration: none;
      }}
      a:hover {{
        text-decoration: underline;
      }}
    </style>
  </head>
  <body>
    <div class="container">
      <p>Redirecting to <a href="{escaped_url}">{escaped_url}</a>...</p>
      <noscript>
        <p>If you are not redirected automatically, <a href="{escaped_url}">click here</a>.</p>
      </noscript>
    </div>
    <script>
      window.location.replace({js_url});
    </script>
  </body>
</html>"#
    )
}
