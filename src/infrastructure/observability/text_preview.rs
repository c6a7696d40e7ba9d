const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens document text for log lines.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.replace('\n', " ");
    }

    let visible: String = trimmed
        .chars()
        .take(MAX_VISIBLE_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("{}... ({} chars total)", visible, total)
}
