pub mod keyboard;
pub mod picker;
pub mod pointer;
