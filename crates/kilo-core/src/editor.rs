use std::io::{Read, Write};
use std::path::Path;

use crate::cursor::{CursorPosition, ScreenGeometry};
use crate::dispatch::{EditorCommand, dispatch};
use crate::error::Result;
use crate::keys::{Movement, read_key};
use crate::lines::LineStore;
use crate::render;

/// State of one editing session: the screen, the cursor and the file lines.
#[derive(Debug, Clone)]
pub struct Editor {
    geometry: ScreenGeometry,
    cursor: CursorPosition,
    lines: LineStore,
}

impl Editor {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self::with_lines(geometry, LineStore::new())
    }

    pub fn with_lines(geometry: ScreenGeometry, lines: LineStore) -> Self {
        Self {
            geometry,
            cursor: CursorPosition::default(),
            lines,
        }
    }

    pub fn open(geometry: ScreenGeometry, path: &Path) -> Result<Self> {
        Ok(Self::with_lines(geometry, LineStore::open(path)?))
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    pub fn move_cursor(&mut self, movement: Movement) {
        self.cursor.apply(movement, self.geometry);
    }

    pub fn refresh<W: Write + ?Sized>(&self, out: &mut W, with_content: bool) -> Result<()> {
        render::refresh(out, &self.lines, self.geometry, self.cursor, with_content)
    }

    /// Draws, reads a key and dispatches it until the quit key arrives.
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            self.refresh(output, true)?;
            let key = read_key(input)?;
            tracing::trace!(?key, "key");
            if dispatch(self, key) == EditorCommand::Exit {
                tracing::debug!(cursor = ?self.cursor, "exit requested");
                return Ok(());
            }
        }
    }
}
