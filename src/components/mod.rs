//! Page chrome that sits outside the section flow.
mod cursor;
mod navigation;

pub use cursor::Cursor;
pub use navigation::Navigation;
