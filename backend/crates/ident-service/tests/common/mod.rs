pub mod fakes;
pub mod harness;

#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use harness::*;
