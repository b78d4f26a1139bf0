//! Plain-text tree sink
//!
//! This module provides `TextOutput`, which writes tree lines to any `Write`
//! without colors, for use with `TreeRenderer`.

use std::io::{self, Write};

use crate::tree::{EntryStatus, TreeOutput, TreeSymbols};

/// Writes one UTF-8 line per node.
pub struct TextOutput<W: Write> {
    writer: W,
    symbols: TreeSymbols,
}

impl<W: Write> TextOutput<W> {
    pub fn new(writer: W, symbols: TreeSymbols) -> Self {
        Self { writer, symbols }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TreeOutput for TextOutput<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "{}/", name)
    }

    fn output_entry(
        &mut self,
        prefix: &str,
        name: &str,
        is_last: bool,
        status: Option<EntryStatus>,
    ) -> io::Result<()> {
        let connector = self.symbols.connector(is_last);
        match status {
            None => writeln!(self.writer, "{}{}{}/", prefix, connector, name),
            Some(status) => writeln!(self.writer, "{}{}{} {}", prefix, connector, name, status),
        }
    }
}
