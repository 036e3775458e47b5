// SPDX-License-Identifier: MIT
//
// The per-session escape builder and ANSI capability detection.
//
// Safety: the one `unsafe` block here is the `isatty(3)` probe — the
// standard POSIX way to ask whether stdout is a terminal. There is no safe
// alternative in std that also works on a raw fd we don't own.
#![allow(unsafe_code)]
//
// Every positioning call and write session accumulates its output in an
// `AnsiBuffer` and flushes it to the sink in one append. The buffer is also
// where the force-vs-autodetect decision lands: a buffer built with escapes
// disabled swallows movement, erasure, and color commands while letting
// text and newlines through, so a non-ANSI sink (a log file, a dumb
// terminal, a CI pipe) receives clean text.
//
// Writes into the buffer go through the `ansi` module's `io::Result`
// functions but target a plain `Vec<u8>`, which never fails — hence the
// `.ok()` discards. The only write that can genuinely fail is the final
// flush to the sink.

use std::ffi::OsString;
use std::io::{self, Write};

use crate::ansi;
use crate::color::AnsiColor;

// ─── AnsiMode ────────────────────────────────────────────────────────────────

/// How escape generation is decided, fixed per writer at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnsiMode {
    /// Emit escapes only if ANSI support is detected at construction time.
    #[default]
    Auto,
    /// Always emit escapes, regardless of what the output looks like.
    ///
    /// For sinks known to be ANSI-capable by policy — a pty the caller set
    /// up, or output destined for a terminal emulator it controls.
    Force,
}

impl AnsiMode {
    /// Resolve the mode to a concrete "emit escapes" flag.
    ///
    /// Called once when a writer is constructed; the answer never changes
    /// for that writer's lifetime.
    #[must_use]
    pub fn resolve(self) -> bool {
        match self {
            Self::Force => true,
            Self::Auto => ansi_detected(),
        }
    }
}

// ─── Capability Detection ────────────────────────────────────────────────────

/// Whether the current process appears to be writing to an ANSI terminal.
///
/// True when stdout is a TTY, `TERM` is not `dumb`, and `NO_COLOR` is unset
/// or empty.
#[must_use]
pub fn ansi_detected() -> bool {
    supports_ansi(
        std::env::var_os("NO_COLOR"),
        std::env::var_os("TERM"),
        stdout_is_tty(),
    )
}

/// The detection policy, separated from the environment so it can be tested.
fn supports_ansi(no_color: Option<OsString>, term: Option<OsString>, tty: bool) -> bool {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if term.is_some_and(|t| t == "dumb") {
        return false;
    }
    tty
}

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
fn stdout_is_tty() -> bool {
    false
}

// ─── AnsiBuffer ──────────────────────────────────────────────────────────────

/// A transient accumulator for one positioning call or write session.
///
/// All escape and text fragments for the session land here; the writer
/// flushes the accumulated bytes to the sink exactly once at session end.
/// When built with escapes disabled, the escape-emitting methods are no-ops
/// and only text and newlines accumulate.
#[derive(Debug)]
pub struct AnsiBuffer {
    bytes: Vec<u8>,
    escapes: bool,
}

const SESSION_CAPACITY: usize = 256;

impl AnsiBuffer {
    /// Create an empty buffer. `escapes` gates every escape-emitting method.
    #[must_use]
    pub fn new(escapes: bool) -> Self {
        Self {
            bytes: Vec::with_capacity(SESSION_CAPACITY),
            escapes,
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has accumulated.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether escape-emitting methods actually emit.
    #[inline]
    #[must_use]
    pub const fn escapes_enabled(&self) -> bool {
        self.escapes
    }

    // ── Text ────────────────────────────────────────────────────────────

    /// Append literal text. Always emitted, escapes or not.
    pub fn text(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    /// Append a line break. Always emitted, escapes or not.
    pub fn newline(&mut self) {
        self.bytes.push(b'\n');
    }

    // ── Movement and erasure (escape-gated) ─────────────────────────────

    /// Move up `n` rows.
    pub fn cursor_up(&mut self, n: u16) {
        if self.escapes {
            ansi::cursor_up(&mut self.bytes, n).ok();
        }
    }

    /// Move down `n` rows.
    pub fn cursor_down(&mut self, n: u16) {
        if self.escapes {
            ansi::cursor_down(&mut self.bytes, n).ok();
        }
    }

    /// Move right `n` columns.
    pub fn cursor_right(&mut self, n: u16) {
        if self.escapes {
            ansi::cursor_right(&mut self.bytes, n).ok();
        }
    }

    /// Move left `n` columns.
    pub fn cursor_left(&mut self, n: u16) {
        if self.escapes {
            ansi::cursor_left(&mut self.bytes, n).ok();
        }
    }

    /// Erase from the cursor to the end of the line.
    pub fn erase_forward(&mut self) {
        if self.escapes {
            ansi::erase_forward(&mut self.bytes).ok();
        }
    }

    // ── Color brackets (escape-gated) ───────────────────────────────────

    /// Open a color bracket.
    pub fn color_on(&mut self, color: &AnsiColor) {
        if self.escapes {
            color.on(&mut self.bytes).ok();
        }
    }

    /// Close a color bracket.
    pub fn color_off(&mut self, color: &AnsiColor) {
        if self.escapes {
            color.off(&mut self.bytes).ok();
        }
    }

    // ── Flush ───────────────────────────────────────────────────────────

    /// Write the accumulated bytes to `w` in one append and clear.
    ///
    /// An empty buffer writes nothing — repositioning to where the cursor
    /// already sits must not touch the sink at all.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.bytes.is_empty() {
            w.write_all(&self.bytes)?;
            w.flush()?;
            self.bytes.clear();
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
