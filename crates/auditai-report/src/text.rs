//! Text helpers for the built-in PDF fonts.
//!
//! The standard Helvetica faces only cover a single-byte character set, so
//! typographic punctuation is folded to ASCII and anything else outside
//! ASCII becomes `?`.

/// Approximate Helvetica advance width as a fraction of the font size.
const AVG_CHAR_WIDTH_EM: f32 = 0.5;

/// Millimetres per PostScript point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Fold text to the character set the built-in fonts can draw.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{201B}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('-'),
            '\u{2265}' => out.push_str(">="),
            '\u{2264}' => out.push_str("<="),
            '\u{00A0}' | '\t' => out.push(' '),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}

/// How many characters fit on a line of `width_mm` at `font_size` points.
pub fn chars_per_line(width_mm: f32, font_size: f32) -> usize {
    let char_mm = font_size * AVG_CHAR_WIDTH_EM * MM_PER_PT;
    ((width_mm / char_mm).floor() as usize).max(1)
}

/// Greedy word wrap. Words longer than a line are split.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
