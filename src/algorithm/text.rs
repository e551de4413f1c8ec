//! Label cleanup and wrapping for gauge titles.

/// Category markers removed from every label.
pub const SKILL_PREFIXES: [&str; 4] = ["A-SK-", "B-SK-", "C-SK-", "D-SK-"];

/// Bare section markers, removed only when the variant asks for it.
pub const BARE_PREFIXES: [&str; 4] = ["A-", "B-", "C-", "D-"];

/// Line break understood by the dashboard page.
pub const LINE_BREAK: &str = "<br>";

pub const DEFAULT_WRAP_WIDTH: usize = 35;

/// Strips the prefix tokens anywhere in `label`.
///
/// Removal repeats until nothing changes: dropping `A-SK-` from
/// `A-A-SK-SK-` leaves a fresh `A-SK-` behind, and a second call must not
/// find anything left to strip.
pub fn normalize(label: &str, strip_bare_prefixes: bool) -> String {
    let mut current = label.to_string();
    loop {
        let mut next = current.clone();
        for token in SKILL_PREFIXES {
            next = next.replace(token, "");
        }
        if strip_bare_prefixes {
            for token in BARE_PREFIXES {
                next = next.replace(token, "");
            }
        }
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Greedy word packing. A word longer than `max_line_length` gets a line to
/// itself and is never split.
pub fn wrap_lines(label: &str, max_line_length: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in label.split_whitespace() {
        let word_len = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= max_line_length {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn wrap(label: &str, max_line_length: usize) -> String {
    wrap_lines(label, max_line_length).join(LINE_BREAK)
}

/// Title shown under a gauge: normalized, then wrapped at the default width.
pub fn display_label(label: &str, strip_bare_prefixes: bool) -> String {
    wrap(&normalize(label, strip_bare_prefixes), DEFAULT_WRAP_WIDTH)
}
