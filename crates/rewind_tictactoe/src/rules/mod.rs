//! Rule checks over a single board snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
