mod column;
mod common;
mod participant;
mod prediction;
mod qualifying;
mod result;
mod round;
mod snapshot;

pub use column::*;
pub use common::*;
pub use participant::*;
pub use prediction::*;
pub use qualifying::*;
pub use result::*;
pub use round::*;
pub use snapshot::*;
