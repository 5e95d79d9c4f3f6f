/*
    Top-level
*/

mod context;
mod integer;
mod number;
mod radix;
mod round;
mod simple;

pub mod util;

pub use context::*;
pub use integer::*;
pub use number::*;
pub use radix::*;
pub use round::*;
pub use simple::*;
