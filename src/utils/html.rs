/// Escapar texto para interpolarlo en HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Fragmento que se muestra cuando una vista no se puede cargar
pub fn not_found_fragment(message: &str) -> String {
    format!("<h2>404</h2><p>{}</p>", escape_html(message))
}

/// "story-list" -> "Story-list"
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_fragment_wraps_message() {
        assert_eq!(
            not_found_fragment("Halaman about tidak ditemukan."),
            "<h2>404</h2><p>Halaman about tidak ditemukan.</p>"
        );
    }

    #[test]
    fn not_found_fragment_escapes_markup() {
        assert_eq!(
            not_found_fragment("<script>x</script>"),
            "<h2>404</h2><p>&lt;script&gt;x&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize_first("story-list"), "Story-list");
        assert_eq!(capitalize_first("home"), "Home");
        assert_eq!(capitalize_first(""), "");
    }
}
