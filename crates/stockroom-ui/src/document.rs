//! Full HTML document wrapper.

use crate::html::escape;
use crate::theme::STYLESHEET;

/// Wrap `body` in a self-contained HTML document.
///
/// The title reads `{title} - {brand}`. CSS is inlined; the document has no
/// external resource references.
pub fn render_document(title: &str, brand: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {brand}</title>
<style>{STYLESHEET}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        brand = escape(brand),
    )
}
