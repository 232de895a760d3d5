pub use self::{field::*, line::*};

pub mod field;
pub mod line;
