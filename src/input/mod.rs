//! Input reading from the positional argument or stdin.

mod reader;

pub use reader::InputReader;
