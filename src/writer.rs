// SPDX-License-Identifier: MIT
//
// The live-area writer — cursor-diff positioning and scoped write sessions.
//
// A console renderer thinks in logical coordinates: "write this styled text
// at row 2, column 0". The terminal only understands relative movement from
// wherever its cursor happens to be. `AnsiWriter` closes that gap. It keeps
// one piece of state — its belief about where the real cursor sits — and
// turns every logical request into the smallest set of relative escapes
// that gets there:
//
//   same row      → one horizontal move (or nothing)
//   different row → back to column 0, one vertical move, out to the column
//
// Vertical escapes don't reset the column, which is why the cross-row case
// returns to column 0 first. At most three escapes per reposition, ever.
//
// Rows are bottom-up (row 0 is the bottom-most tracked line). A newline on
// row 0 makes the physical terminal scroll, which shifts every row number
// tracked outside this writer — the `on_scroll` hook is how that outside
// state gets told. Everything else about scrolling is the caller's problem.
//
// Each call accumulates its escapes and text in a fresh `AnsiBuffer` and
// flushes to the sink exactly once at the end. The flush is the only
// fallible step; when it fails, the tracked cursor and the physical
// terminal may disagree and the writer should be abandoned.

use std::io::{self, Write};

use log::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::color::{AnsiColor, Style, StyleMap};
use crate::cursor::Cursor;
use crate::output::{AnsiBuffer, AnsiMode};

// ─── AnsiWriter ──────────────────────────────────────────────────────────────

/// Cursor-addressed ANSI writer for a terminal's live area.
///
/// Owns the sink, the style resolver, and the tracked cursor position.
/// Construct with [`new`](Self::new) (autodetected ANSI support) or
/// [`with_mode`](Self::with_mode), optionally chaining
/// [`on_scroll`](Self::on_scroll) to observe bottom-row scrolling.
///
/// Not safe for concurrent use: all calls against one writer must come from
/// a single logical rendering thread.
///
/// ```
/// use n_console::{AnsiMode, AnsiWriter, Cursor, DefaultStyleMap, Style};
///
/// let mut w = AnsiWriter::with_mode(Vec::new(), DefaultStyleMap, AnsiMode::Force);
/// let end = w
///     .write_at(Cursor::row_start(1), |ctx| {
///         ctx.with_style(Style::Header, |ctx| {
///             ctx.text("Building");
///         });
///     })
///     .unwrap();
/// assert_eq!(end, Cursor::new(1, 8));
/// ```
pub struct AnsiWriter<W, M> {
    sink: W,
    styles: M,
    escapes: bool,
    write_cursor: Cursor,
    on_scroll: Box<dyn FnMut()>,
}

impl<W: Write, M: StyleMap> AnsiWriter<W, M> {
    /// Create a writer with autodetected ANSI support ([`AnsiMode::Auto`]).
    pub fn new(sink: W, styles: M) -> Self {
        Self::with_mode(sink, styles, AnsiMode::default())
    }

    /// Create a writer with an explicit escape mode.
    ///
    /// The mode is resolved to a concrete emit/suppress flag here, once;
    /// the decision never changes for this writer's lifetime.
    pub fn with_mode(sink: W, styles: M, mode: AnsiMode) -> Self {
        Self::with_escapes(sink, styles, mode.resolve())
    }

    fn with_escapes(sink: W, styles: M, escapes: bool) -> Self {
        Self {
            sink,
            styles,
            escapes,
            write_cursor: Cursor::ORIGIN,
            on_scroll: Box::new(|| {}),
        }
    }

    /// Install the scroll-adjustment hook, replacing the default no-op.
    ///
    /// The hook fires every time a newline is written on the bottom-most
    /// tracked row — the moment the physical terminal scrolls and every
    /// row number tracked outside this writer shifts by one.
    #[must_use]
    pub fn on_scroll(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_scroll = Box::new(hook);
        self
    }

    /// The writer's belief about where the terminal cursor currently sits.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.write_cursor
    }

    /// Whether escape sequences are being emitted (vs. text-only output).
    #[inline]
    #[must_use]
    pub const fn escapes_enabled(&self) -> bool {
        self.escapes
    }

    /// The sink (for testing and debugging).
    #[inline]
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the writer, returning the sink.
    #[must_use]
    pub fn into_sink(self) -> W {
        self.sink
    }

    // ── Public operations ───────────────────────────────────────────────

    /// Move the terminal cursor to `target`, emitting the minimal escapes.
    ///
    /// Repositioning to where the cursor already sits emits nothing and
    /// never touches the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the flushed bytes. The tracked
    /// cursor and the physical terminal may then disagree; abandon the
    /// writer rather than continuing.
    pub fn position_cursor_at(&mut self, target: Cursor) -> io::Result<()> {
        let mut buf = AnsiBuffer::new(self.escapes);
        Self::emit_move(&mut buf, &mut self.write_cursor, target);
        self.flush(&mut buf)
    }

    /// Run a write session at `target`.
    ///
    /// Emits the minimal move to `target`, hands a fluent [`AnsiContext`]
    /// to `session`, then flushes everything the session accumulated to
    /// the sink in a single append. Returns the cursor position after the
    /// session — callers that need it store the returned value; nothing is
    /// mutated through shared references.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the flushed bytes. The tracked
    /// cursor and the physical terminal may then disagree; abandon the
    /// writer rather than continuing.
    pub fn write_at<F>(&mut self, target: Cursor, session: F) -> io::Result<Cursor>
    where
        F: FnOnce(&mut AnsiContext<'_, M>),
    {
        let mut buf = AnsiBuffer::new(self.escapes);
        Self::emit_move(&mut buf, &mut self.write_cursor, target);
        {
            let mut ctx = AnsiContext {
                buf: &mut buf,
                cursor: &mut self.write_cursor,
                styles: &self.styles,
                on_scroll: &mut *self.on_scroll,
            };
            session(&mut ctx);
        }
        let end = self.write_cursor;
        self.flush(&mut buf)?;
        Ok(end)
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Emit the minimal relative movement from `*from` to `target`, then
    /// set `*from = target`.
    ///
    /// Same row: one horizontal move, or nothing when the columns already
    /// match. Different row: return to column 0 (vertical moves don't
    /// reset the column), one vertical move — up when the target row is
    /// numerically greater, since rows grow upward from the bottom — then
    /// out to the target column. Never more than three escapes.
    fn emit_move(buf: &mut AnsiBuffer, from: &mut Cursor, target: Cursor) {
        if from.row == target.row {
            if from.col == target.col {
                return;
            }
            if from.col < target.col {
                buf.cursor_right(target.col - from.col);
            } else {
                buf.cursor_left(from.col - target.col);
            }
        } else {
            if from.col > 0 {
                buf.cursor_left(from.col);
            }
            if from.row < target.row {
                buf.cursor_up(target.row - from.row);
            } else {
                buf.cursor_down(from.row - target.row);
            }
            if target.col > 0 {
                buf.cursor_right(target.col);
            }
        }
        *from = target;
    }

    fn flush(&mut self, buf: &mut AnsiBuffer) -> io::Result<()> {
        trace!("console flush: {} bytes", buf.len());
        buf.flush_to(&mut self.sink)
    }
}

// ─── AnsiContext ─────────────────────────────────────────────────────────────

/// The fluent session handed to [`AnsiWriter::write_at`] callbacks.
///
/// Every method returns `&mut Self` so calls chain:
///
/// ```
/// use n_console::{AnsiMode, AnsiWriter, Cursor, DefaultStyleMap};
///
/// let mut w = AnsiWriter::with_mode(Vec::new(), DefaultStyleMap, AnsiMode::Force);
/// w.write_at(Cursor::ORIGIN, |ctx| {
///     ctx.erase_forward().text("done").newline();
/// })
/// .unwrap();
/// ```
///
/// The context reports every character and newline back to the writer, so
/// the tracked cursor stays accurate through the whole session.
pub struct AnsiContext<'a, M> {
    buf: &'a mut AnsiBuffer,
    cursor: &'a mut Cursor,
    styles: &'a M,
    on_scroll: &'a mut dyn FnMut(),
}

impl<M: StyleMap> AnsiContext<'_, M> {
    /// Append literal text, advancing the tracked column by one per
    /// displayable character (grapheme cluster). No width accounting:
    /// every character is assumed to occupy exactly one column.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.text(s);
        let cols = s.graphemes(true).count();
        self.cursor.col = self
            .cursor
            .col
            .saturating_add(u16::try_from(cols).unwrap_or(u16::MAX));
        self
    }

    /// Append a line break.
    ///
    /// The column resets to 0. Above the bottom row, the row decrements —
    /// the next line down has the lower number. On the bottom row the
    /// terminal scrolls instead: the row stays 0 and the writer's scroll
    /// hook fires so outside row-tracking state can adjust.
    pub fn newline(&mut self) -> &mut Self {
        self.buf.newline();
        self.cursor.col = 0;
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
        } else {
            debug!("newline on bottom row — scroll adjustment");
            (self.on_scroll)();
        }
        self
    }

    /// Erase from the cursor to the end of the line. The cursor (tracked
    /// and physical) does not move.
    pub fn erase_forward(&mut self) -> &mut Self {
        self.buf.erase_forward();
        self
    }

    /// Run `inner` bracketed by the color's on/off codes.
    ///
    /// The off code is emitted unconditionally after `inner` returns —
    /// however many lines, nested brackets, or cursor movements happened
    /// inside. Style scoping is purely an escape bracket, never a cursor
    /// operation.
    pub fn with_color(&mut self, color: &AnsiColor, inner: impl FnOnce(&mut Self)) -> &mut Self {
        self.buf.color_on(color);
        inner(self);
        self.buf.color_off(color);
        self
    }

    /// Like [`with_color`](Self::with_color), resolving the style through
    /// the writer's style map first.
    pub fn with_style(&mut self, style: Style, inner: impl FnOnce(&mut Self)) -> &mut Self {
        let color = self.styles.color_for(style);
        self.with_color(&color, inner)
    }

    /// The tracked cursor as of this point in the session.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        *self.cursor
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
