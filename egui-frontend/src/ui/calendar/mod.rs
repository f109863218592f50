pub mod rendering;
pub mod standalone;
pub mod state;

pub use rendering::*;
pub use standalone::*;
pub use state::*;
