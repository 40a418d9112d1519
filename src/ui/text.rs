// SPDX-License-Identifier: PMPL-1.0-or-later

//! Plain-text layout helpers.
//!
//! All measurement happens on unstyled text; screens wrap and align first,
//! then paint whole lines. Widths are character counts, which holds for
//! the catalog's Latin text.

/// Greedy word wrap. Words longer than the width are hard-split so no
/// returned line exceeds it. Empty input yields one empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                hard_split(word, width, &mut lines, &mut current);
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                hard_split(word, width, &mut lines, &mut current);
            }
        }
    }
    lines.push(current);
    lines
}

// A partial final chunk stays in `current` so following words can join it.
fn hard_split(word: &str, width: usize, lines: &mut Vec<String>, current: &mut String) {
    let chars: Vec<char> = word.chars().collect();
    for chunk in chars.chunks(width) {
        if !current.is_empty() {
            lines.push(std::mem::take(current));
        }
        current.extend(chunk);
        if current.chars().count() == width {
            lines.push(std::mem::take(current));
        }
    }
}

/// Center `text` within `width` by left-padding. Text wider than the
/// width is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Left and right text on one line, right-aligned to `width`. Falls back
/// to a single space separator when the pieces do not fit.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    if used >= width {
        return format!("{} {}", left, right);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}

/// Horizontal rule.
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `width` characters.
pub fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
