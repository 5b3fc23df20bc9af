use crate::editor::Editor;
use crate::keys::{KeyEvent, ctrl_key};

pub const QUIT_KEY: u8 = ctrl_key(b'q');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Exit,
    NoOp,
}

pub fn dispatch(editor: &mut Editor, key: KeyEvent) -> EditorCommand {
    match key {
        KeyEvent::Symbol(QUIT_KEY) => EditorCommand::Exit,
        KeyEvent::Symbol(_) => EditorCommand::NoOp,
        KeyEvent::Movement(movement) => {
            editor.move_cursor(movement);
            EditorCommand::NoOp
        }
    }
}
