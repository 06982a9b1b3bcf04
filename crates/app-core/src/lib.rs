pub mod carousel;
pub mod constants;
pub mod state;

pub use carousel::*;
pub use constants::*;
pub use state::*;
