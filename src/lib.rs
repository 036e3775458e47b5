// SPDX-License-Identifier: MIT
//
// n-console — minimal-escape ANSI writer for a terminal's live area.
//
// The primitive underneath a console renderer: it turns logical "write this
// styled text at row/column" requests into the smallest stream of ANSI
// escapes that moves the real cursor and emits the characters. The writer
// tracks where the terminal cursor actually is, so repositioning to a spot
// it already occupies costs zero bytes, a same-row move costs one escape,
// and a cross-row move costs at most three.
//
// Rows are bottom-up: row 0 is the bottom-most tracked line, the one a
// scrolling terminal pushes everything up from. What to draw — progress
// bars, status rows, colored labels — is the caller's business; this crate
// only knows how to get it onto the screen cheaply.
//
// No TUI framework underneath: escape sequences are generated directly,
// the way the rest of this rendering stack does it. Every byte sent to the
// terminal is accounted for.

pub mod ansi;
pub mod color;
pub mod cursor;
pub mod output;
pub mod writer;

pub use color::{AnsiColor, Attr, DefaultStyleMap, Style, StyleMap};
pub use cursor::Cursor;
pub use output::{AnsiBuffer, AnsiMode};
pub use writer::{AnsiContext, AnsiWriter};
