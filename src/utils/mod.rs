// Utils compartidos

pub mod constants;
pub mod storage;
pub mod html;

pub use constants::*;
pub use storage::*;
