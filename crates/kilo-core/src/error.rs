use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to query terminal size")]
    SizeQuery(#[source] io::Error),

    #[error("unable to open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal i/o failed")]
    Io(#[from] io::Error),

    #[error("unable to draw frame")]
    Render(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
