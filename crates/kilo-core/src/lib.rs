pub mod cursor;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod keys;
pub mod lines;
pub mod render;

pub use cursor::{CursorPosition, ScreenGeometry};
pub use dispatch::{EditorCommand, dispatch};
pub use editor::Editor;
pub use error::{Error, Result};
pub use keys::{KeyEvent, Movement, read_key};
pub use lines::LineStore;
pub use render::refresh;
