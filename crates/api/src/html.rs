//! Server-side HTML for the product listing page.

use std::fmt::Write;

use prodbench_db::models::product::Product;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(input: &str) -> String {
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

/// Render the `/fortune` page: one table row per product.
pub fn render_fortune(products: &[Product]) -> String {
    let mut rows = String::new();
    for p in products {
        // Writing into a String cannot fail.
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2} {}</td><td>{}</td><td>{}</td></tr>",
            p.id,
            escape(&p.name),
            escape(&p.brand),
            escape(&p.category),
            p.price,
            escape(&p.currency),
            p.stock,
            escape(&p.availability),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Fortunes</title></head>
<body>
<table>
<tr><th>id</th><th>name</th><th>brand</th><th>category</th><th>price</th><th>stock</th><th>availability</th></tr>
{rows}</table>
</body>
</html>
"#
    )
}
