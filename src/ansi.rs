// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — that's the writer's job. This module
// just knows the byte-level encoding of every terminal command we need.
//
// Cursor movement here is *relative* (CUU/CUD/CUF/CUB): the live-area writer
// never knows its absolute screen position, only its offset from the last
// thing it wrote. Counts must be at least 1 — the diff algorithm upstream
// guarantees it never asks for a zero-length move.
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to a `Vec`-backed buffer.

use std::io::{self, Write};

// ─── Relative Cursor Movement ────────────────────────────────────────────────

/// Move the cursor up `n` rows (CUU).
#[inline]
pub fn cursor_up(w: &mut impl Write, n: u16) -> io::Result<()> {
    write!(w, "\x1b[{n}A")
}

/// Move the cursor down `n` rows (CUD).
#[inline]
pub fn cursor_down(w: &mut impl Write, n: u16) -> io::Result<()> {
    write!(w, "\x1b[{n}B")
}

/// Move the cursor right `n` columns (CUF).
#[inline]
pub fn cursor_right(w: &mut impl Write, n: u16) -> io::Result<()> {
    write!(w, "\x1b[{n}C")
}

/// Move the cursor left `n` columns (CUB).
#[inline]
pub fn cursor_left(w: &mut impl Write, n: u16) -> io::Result<()> {
    write!(w, "\x1b[{n}D")
}

// ─── Line Erasure ────────────────────────────────────────────────────────────

/// Erase from the cursor to the end of the line (EL 0).
///
/// The cursor does not move. Erased cells take the current background.
#[inline]
pub fn erase_forward(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[K")
}

// ─── Select Graphic Rendition ────────────────────────────────────────────────

/// Emit an SGR sequence for the given parameter list.
///
/// Parameters are semicolon-separated: `sgr(w, &[1, 31])` writes `\x1b[1;31m`
/// (bold + red foreground). An empty list emits nothing at all — a bare
/// `\x1b[m` would reset every attribute, which is never what a no-op wants.
pub fn sgr(w: &mut impl Write, params: &[u8]) -> io::Result<()> {
    if params.is_empty() {
        return Ok(());
    }

    w.write_all(b"\x1b[")?;
    let mut first = true;
    for p in params {
        if !first {
            w.write_all(b";")?;
        }
        write!(w, "{p}")?;
        first = false;
    }
    w.write_all(b"m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an emission function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Relative movement ───────────────────────────────────────────────

    #[test]
    fn up_one() {
        assert_eq!(emit(|w| cursor_up(w, 1)), "\x1b[1A");
    }

    #[test]
    fn up_many() {
        assert_eq!(emit(|w| cursor_up(w, 12)), "\x1b[12A");
    }

    #[test]
    fn down() {
        assert_eq!(emit(|w| cursor_down(w, 3)), "\x1b[3B");
    }

    #[test]
    fn right() {
        assert_eq!(emit(|w| cursor_right(w, 4)), "\x1b[4C");
    }

    #[test]
    fn left() {
        assert_eq!(emit(|w| cursor_left(w, 5)), "\x1b[5D");
    }

    #[test]
    fn movement_max_count() {
        // Verify no overflow formatting with large counts.
        assert_eq!(emit(|w| cursor_right(w, u16::MAX)), "\x1b[65535C");
    }

    // ── Line erasure ────────────────────────────────────────────────────

    #[test]
    fn erase_forward_sequence() {
        assert_eq!(emit(|w| erase_forward(w)), "\x1b[K");
    }

    // ── SGR ─────────────────────────────────────────────────────────────

    #[test]
    fn sgr_empty_emits_nothing() {
        assert_eq!(emit(|w| sgr(w, &[])), "");
    }

    #[test]
    fn sgr_single_param() {
        assert_eq!(emit(|w| sgr(w, &[1])), "\x1b[1m");
    }

    #[test]
    fn sgr_reset() {
        assert_eq!(emit(|w| sgr(w, &[0])), "\x1b[0m");
    }

    #[test]
    fn sgr_multiple_params() {
        assert_eq!(emit(|w| sgr(w, &[1, 31])), "\x1b[1;31m");
    }

    #[test]
    fn sgr_extended_palette() {
        assert_eq!(emit(|w| sgr(w, &[38, 5, 208])), "\x1b[38;5;208m");
    }

    // ── Composition ─────────────────────────────────────────────────────

    #[test]
    fn sequences_compose() {
        let mut buf = Vec::new();
        cursor_left(&mut buf, 5).unwrap();
        cursor_down(&mut buf, 2).unwrap();
        cursor_right(&mut buf, 3).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[5D\x1b[2B\x1b[3C");
    }
}
