//! # JSONC Comment Stripping
//!
//! Converts JSON-with-comments into text a strict JSON parser accepts by
//! dropping `//` line comments and `/* */` block comments.
//!
//! The scanner tracks only whether it is inside a double-quoted string.
//! Inside a string a backslash always consumes the following character, so
//! `\"` and `\\` never flip the string state and comment markers inside
//! string values (URLs, globs) are left alone.
//!
//! Deliberately not handled: single-quoted strings, nested block comments,
//! unquoted keys, trailing commas. Files that need those are declared
//! `native-jsonc` and never reach this module.

use std::iter::Peekable;
use std::str::Chars;

/// Remove `//` and `/* */` comments from `text`, leaving string literals intact.
///
/// Line comments stop before the terminating newline, so line structure is
/// kept. An unterminated block comment swallows the rest of the input. This
/// function never fails; text that is still not JSON afterwards is reported
/// by the parser.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string && c == '\\' {
            out.push(c);
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
            continue;
        }

        if c == '"' {
            in_string = !in_string;
            out.push(c);
            continue;
        }

        if !in_string && c == '/' {
            match chars.peek() {
                Some('/') => {
                    skip_line_comment(&mut chars);
                    continue;
                }
                Some('*') => {
                    chars.next();
                    skip_block_comment(&mut chars);
                    continue;
                }
                _ => {}
            }
        }

        out.push(c);
    }

    out
}

/// Advance to the next `\n` without consuming it.
fn skip_line_comment(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|&c| c != '\n') {
        chars.next();
    }
}

/// Advance past the closing `*/`, or to end of input.
fn skip_block_comment(chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'/') {
            chars.next();
            return;
        }
    }
}
