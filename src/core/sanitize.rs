// src/core/sanitize.rs

/// Decode the handful of entities leaderboard cells actually carry.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        // last, so "&amp;lt;" stays "&lt;"
        .replace("&amp;", "&")
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First `n` characters (not bytes). Shorter input is returned whole.
pub fn truncate_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Numeric cell: drop thousands separators and stray spaces before parsing.
pub fn numeric_cell(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_and_whitespace() {
        assert_eq!(normalize_entities("A&nbsp;&amp;&nbsp;B"), "A & B");
        assert_eq!(normalize_entities("&amp;lt;"), "&lt;");
        assert_eq!(normalize_ws("  Max \n\t Verstappen "), "Max Verstappen");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("1:30.123 (+0.2)", 8), "1:30.123");
        assert_eq!(truncate_chars("1:30", 8), "1:30");
        assert_eq!(truncate_chars("ÄÖÜ", 2), "ÄÖ");
    }

    #[test]
    fn numeric_cell_strips_noise() {
        assert_eq!(numeric_cell(" 30.123 "), "30.123");
        assert_eq!(numeric_cell("1,030.5"), "1030.5");
    }
}
