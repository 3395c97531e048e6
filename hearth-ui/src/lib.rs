pub mod interop;
pub mod overlay;

pub use interop::*;
pub use overlay::*;
