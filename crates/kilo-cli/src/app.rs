use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsFd, BorrowedFd};

use anyhow::{Context, Result};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use kilo_core::{Editor, Error};

use crate::terminal::RawMode;

pub struct App {
    editor: Editor,
}

impl App {
    pub fn new(editor: Editor) -> Self {
        Self { editor }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut output =
            unbuffered(io::stdout().as_fd()).context("unable to open terminal output")?;
        let raw_mode = RawMode::enable().context("unable to enter raw mode")?;
        let mut input = io::stdin().lock();

        let loop_result = self.editor.run(&mut input, &mut output);
        let restore_result = raw_mode.restore();
        let exit_result = write_exit_frame(&self.editor, &mut output);

        loop_result?;
        restore_result.context("unable to restore terminal attributes")?;
        exit_result?;
        tracing::info!("editor closed");
        Ok(())
    }
}

/// A writer with no buffering of its own, so each frame handed to
/// `write_all` goes to the terminal in one `write(2)`.
fn unbuffered(fd: BorrowedFd<'_>) -> io::Result<File> {
    Ok(File::from(fd.try_clone_to_owned()?))
}

/// Clears the screen and parks the cursor so the shell prompt starts clean.
fn write_exit_frame<W: Write>(editor: &Editor, out: &mut W) -> kilo_core::Result<()> {
    let mut frame = Vec::new();
    queue!(frame, Clear(ClearType::All)).map_err(Error::Render)?;
    editor.refresh(&mut frame, false)?;
    out.write_all(&frame).map_err(Error::Render)?;
    out.flush().map_err(Error::Render)
}
