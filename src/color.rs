// SPDX-License-Identifier: MIT
//
// Colors as on/off SGR brackets.
//
// The writer never reasons about what a color *looks like* — it only needs
// to bracket a span of text with "turn this on" and "turn this off". So a
// color here is exactly that: two SGR parameter lists. A foreground color,
// a background color, an attribute like bold, or any combination of them
// all fit the same shape.
//
// Which bracket a semantic style (header, failure, progress status) gets is
// policy, and policy lives behind the `StyleMap` trait. The writer holds a
// `StyleMap` and resolves style tokens through it; `DefaultStyleMap` is the
// stock policy, replaceable wholesale by the embedding application.

use std::io::{self, Write};

use crate::ansi;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// Each attribute maps to an SGR on-code and an SGR off-code. Combine
    /// with bitwise OR:
    ///
    /// ```
    /// use n_console::color::Attr;
    ///
    /// let emphasis = Attr::BOLD | Attr::ITALIC;
    /// assert!(emphasis.contains(Attr::BOLD));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 / 22 — increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 2 / 22 — decreased intensity (faint).
        const DIM       = 1 << 1;
        /// SGR 3 / 23 — italic or oblique.
        const ITALIC    = 1 << 2;
        /// SGR 4 / 24 — straight underline.
        const UNDERLINE = 1 << 3;
        /// SGR 7 / 27 — swap foreground and background.
        const INVERSE   = 1 << 4;
    }
}

impl Attr {
    /// SGR parameters that switch these attributes on.
    fn on_params(self, out: &mut Vec<u8>) {
        if self.contains(Self::BOLD) {
            out.push(1);
        }
        if self.contains(Self::DIM) {
            out.push(2);
        }
        if self.contains(Self::ITALIC) {
            out.push(3);
        }
        if self.contains(Self::UNDERLINE) {
            out.push(4);
        }
        if self.contains(Self::INVERSE) {
            out.push(7);
        }
    }

    /// SGR parameters that switch these attributes back off.
    ///
    /// BOLD and DIM share off-code 22 (normal intensity); it is emitted once
    /// even when both are set.
    fn off_params(self, out: &mut Vec<u8>) {
        if self.intersects(Self::BOLD | Self::DIM) {
            out.push(22);
        }
        if self.contains(Self::ITALIC) {
            out.push(23);
        }
        if self.contains(Self::UNDERLINE) {
            out.push(24);
        }
        if self.contains(Self::INVERSE) {
            out.push(27);
        }
    }
}

// ─── AnsiColor ───────────────────────────────────────────────────────────────

/// An on/off pair of SGR parameter lists — the writer's whole idea of color.
///
/// "Color" is broad on purpose: a palette foreground, a background, an
/// attribute set like bold, or a combination are all just brackets that the
/// write session opens before a span and closes after it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnsiColor {
    on: Vec<u8>,
    off: Vec<u8>,
}

impl AnsiColor {
    /// The no-op color: opens and closes nothing.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            on: Vec::new(),
            off: Vec::new(),
        }
    }

    /// A foreground color from the 256-color palette.
    ///
    /// Indices 0–7 use the compact SGR codes 30–37, 8–15 the bright codes
    /// 90–97, and everything above the extended `38;5;N` form. The off side
    /// is SGR 39 (default foreground).
    #[must_use]
    pub fn fg(idx: u8) -> Self {
        let on = match idx {
            0..=7 => vec![30 + idx],
            8..=15 => vec![90 + (idx - 8)],
            _ => vec![38, 5, idx],
        };
        Self { on, off: vec![39] }
    }

    /// A background color from the 256-color palette.
    ///
    /// Same encoding strategy as [`fg`](Self::fg) with the BG-specific codes
    /// (40–47, 100–107, `48;5;N`); off is SGR 49 (default background).
    #[must_use]
    pub fn bg(idx: u8) -> Self {
        let on = match idx {
            0..=7 => vec![40 + idx],
            8..=15 => vec![100 + (idx - 8)],
            _ => vec![48, 5, idx],
        };
        Self { on, off: vec![49] }
    }

    /// A pure attribute bracket (bold, dim, italic, ...).
    #[must_use]
    pub fn attrs(attrs: Attr) -> Self {
        Self::plain().with_attrs(attrs)
    }

    /// Add attributes to an existing color.
    ///
    /// ```
    /// use n_console::color::{AnsiColor, Attr};
    ///
    /// let failure_header = AnsiColor::fg(1).with_attrs(Attr::BOLD);
    /// assert!(!failure_header.is_plain());
    /// ```
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        attrs.on_params(&mut self.on);
        attrs.off_params(&mut self.off);
        self
    }

    /// True when this color opens and closes nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.on.is_empty() && self.off.is_empty()
    }

    /// Emit the on-codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn on(&self, w: &mut impl Write) -> io::Result<()> {
        ansi::sgr(w, &self.on)
    }

    /// Emit the off-codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn off(&self, w: &mut impl Write) -> io::Result<()> {
        ansi::sgr(w, &self.off)
    }
}

// ─── Semantic Styles ─────────────────────────────────────────────────────────

/// Semantic text styles a console renderer writes in.
///
/// The renderer thinks in these tokens; what they look like is decided by
/// the [`StyleMap`] the writer was constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Regular output text.
    Normal,
    /// A section or task heading.
    Header,
    /// Echoed user input.
    UserInput,
    /// Explanatory text attached to an item.
    Description,
    /// The transient status of an in-flight operation.
    ProgressStatus,
    /// The heading of a successful outcome.
    SuccessHeader,
    /// Text describing a successful outcome.
    Success,
    /// The heading of a failed outcome.
    FailureHeader,
    /// Text describing a failed outcome.
    Failure,
    /// Advisory text.
    Info,
    /// Error text.
    Error,
}

/// Resolves semantic styles to concrete colors.
///
/// Supplied to the writer at construction; the writer resolves every
/// [`Style`] through it and never holds style→color policy of its own.
pub trait StyleMap {
    /// The color bracket for the given style.
    fn color_for(&self, style: Style) -> AnsiColor;
}

// ─── DefaultStyleMap ─────────────────────────────────────────────────────────

const RED: u8 = 1;
const GREEN: u8 = 2;
const YELLOW: u8 = 3;

/// The stock style policy.
///
/// Headings are bold, outcomes are green/red with bold headers, progress
/// status is dimmed, advisory text is yellow. Applications with their own
/// palette implement [`StyleMap`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyleMap;

impl StyleMap for DefaultStyleMap {
    fn color_for(&self, style: Style) -> AnsiColor {
        match style {
            Style::Normal | Style::Description => AnsiColor::plain(),
            Style::Header | Style::UserInput => AnsiColor::attrs(Attr::BOLD),
            Style::ProgressStatus => AnsiColor::attrs(Attr::DIM),
            Style::SuccessHeader => AnsiColor::fg(GREEN).with_attrs(Attr::BOLD),
            Style::Success => AnsiColor::fg(GREEN),
            Style::FailureHeader => AnsiColor::fg(RED).with_attrs(Attr::BOLD),
            Style::Failure | Style::Error => AnsiColor::fg(RED),
            Style::Info => AnsiColor::fg(YELLOW),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Helper: emit a color's on-codes, some text, then its off-codes.
    fn bracket(color: &AnsiColor, text: &str) -> String {
        let mut buf = Vec::new();
        color.on(&mut buf).unwrap();
        buf.extend_from_slice(text.as_bytes());
        color.off(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── AnsiColor encodings ─────────────────────────────────────────────

    #[test]
    fn plain_emits_nothing() {
        assert_eq!(bracket(&AnsiColor::plain(), "x"), "x");
        assert!(AnsiColor::plain().is_plain());
    }

    #[test]
    fn fg_standard() {
        assert_eq!(bracket(&AnsiColor::fg(1), "x"), "\x1b[31mx\x1b[39m");
    }

    #[test]
    fn fg_bright() {
        assert_eq!(bracket(&AnsiColor::fg(9), "x"), "\x1b[91mx\x1b[39m");
    }

    #[test]
    fn fg_extended() {
        assert_eq!(
            bracket(&AnsiColor::fg(208), "x"),
            "\x1b[38;5;208mx\x1b[39m"
        );
    }

    #[test]
    fn bg_standard() {
        assert_eq!(bracket(&AnsiColor::bg(4), "x"), "\x1b[44mx\x1b[49m");
    }

    #[test]
    fn bg_bright() {
        assert_eq!(bracket(&AnsiColor::bg(12), "x"), "\x1b[104mx\x1b[49m");
    }

    #[test]
    fn bg_extended() {
        assert_eq!(bracket(&AnsiColor::bg(17), "x"), "\x1b[48;5;17mx\x1b[49m");
    }

    // ── Attribute brackets ──────────────────────────────────────────────

    #[test]
    fn bold_bracket() {
        assert_eq!(
            bracket(&AnsiColor::attrs(Attr::BOLD), "x"),
            "\x1b[1mx\x1b[22m"
        );
    }

    #[test]
    fn combined_attrs_single_sequence() {
        let c = AnsiColor::attrs(Attr::BOLD | Attr::ITALIC);
        assert_eq!(bracket(&c, "x"), "\x1b[1;3mx\x1b[22;23m");
    }

    #[test]
    fn bold_and_dim_share_one_off_code() {
        let c = AnsiColor::attrs(Attr::BOLD | Attr::DIM);
        assert_eq!(bracket(&c, "x"), "\x1b[1;2mx\x1b[22m");
    }

    #[test]
    fn underline_and_inverse() {
        let c = AnsiColor::attrs(Attr::UNDERLINE | Attr::INVERSE);
        assert_eq!(bracket(&c, "x"), "\x1b[4;7mx\x1b[24;27m");
    }

    #[test]
    fn fg_with_attrs_composes() {
        let c = AnsiColor::fg(1).with_attrs(Attr::BOLD);
        assert_eq!(bracket(&c, "x"), "\x1b[31;1mx\x1b[39;22m");
    }

    // ── DefaultStyleMap ─────────────────────────────────────────────────

    #[test]
    fn normal_is_plain() {
        assert!(DefaultStyleMap.color_for(Style::Normal).is_plain());
    }

    #[test]
    fn header_is_bold() {
        assert_eq!(
            DefaultStyleMap.color_for(Style::Header),
            AnsiColor::attrs(Attr::BOLD)
        );
    }

    #[test]
    fn failure_header_is_bold_red() {
        assert_eq!(
            DefaultStyleMap.color_for(Style::FailureHeader),
            AnsiColor::fg(1).with_attrs(Attr::BOLD)
        );
    }

    #[test]
    fn success_is_green() {
        assert_eq!(
            DefaultStyleMap.color_for(Style::Success),
            AnsiColor::fg(2)
        );
    }

    #[test]
    fn progress_status_is_dim() {
        assert_eq!(
            DefaultStyleMap.color_for(Style::ProgressStatus),
            AnsiColor::attrs(Attr::DIM)
        );
    }
}
