//! Diagnostic hex dump
//!
//! Formats a raw buffer sixteen bytes per row with an offset prefix, the
//! bytes in two groups of eight, and an ASCII gutter where non-printable
//! bytes show as `.`. Debugging output only; nothing on the wire depends
//! on this shape.

use std::fmt::Write;

fn push_asc(out: &mut String, buf: &[u8]) {
    for &b in buf {
        out.push(if (0x20..=0x7E).contains(&b) { b as char } else { '.' });
    }
}

/// Render `buf` as a hex + ASCII dump.
pub fn hexdump(buf: &[u8]) -> String {
    let mut out = String::new();
    let len = buf.len();
    let mut i = 0;

    while i < len {
        if i % 16 == 0 {
            let _ = write!(out, "[{i:04X}] ");
        }
        let _ = write!(out, "{:02X} ", buf[i]);
        i += 1;
        if i % 8 == 0 {
            out.push_str("  ");
        }
        if i % 16 == 0 {
            push_asc(&mut out, &buf[i - 16..i - 8]);
            out.push(' ');
            push_asc(&mut out, &buf[i - 8..i]);
            out.push('\n');
        }
    }

    if i % 16 != 0 {
        let mut n = 16 - (i % 16);
        out.push(' ');
        if n > 8 {
            out.push(' ');
        }
        while n > 0 {
            out.push_str("   ");
            n -= 1;
        }
        let m = std::cmp::min(8, i % 16);
        let row = i - (i % 16);
        push_asc(&mut out, &buf[row..row + m]);
        out.push(' ');
        let rest = (i % 16) - m;
        if rest > 0 {
            push_asc(&mut out, &buf[i - rest..i]);
        }
        out.push('\n');
    }

    out
}
