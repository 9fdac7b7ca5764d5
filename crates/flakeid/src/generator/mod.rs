mod host;
mod interface;
mod random;

pub use host::*;
pub use interface::*;
pub use random::*;
