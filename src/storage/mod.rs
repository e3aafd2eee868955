pub mod sloths;

pub use sloths::{Sloth, SlothPayload, SlothStore};
