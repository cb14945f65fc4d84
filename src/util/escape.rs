// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Angle-bracket escaping for text spliced into result markup.
//!
//! Element content only needs `<` and `>` touched; ampersands and quotes pass
//! through as-is. The one attribute we write (a result link's `href`) also
//! gets its double quotes escaped.

/// `<` becomes `&lt;`, `>` becomes `&gt;`.
pub fn angle_brackets_to_entity(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_escaped(&mut out, value);
    out
}

/// Append `value` to `out` with angle brackets escaped.
pub fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        push_escaped_char(out, c);
    }
}

#[inline]
pub fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(c),
    }
}

/// Append `value` for use inside a double-quoted attribute.
pub fn push_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            _ => push_escaped_char(out, c),
        }
    }
}

/// `&lt;` becomes `<`, `&gt;` becomes `>`. Every other entity is left alone.
pub fn entity_to_angle_brackets(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("&lt;") {
            out.push('<');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("&gt;") {
            out.push('>');
            rest = after;
        } else {
            out.push('&');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
