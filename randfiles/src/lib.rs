#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod alpha;
pub mod config;
pub mod error;
pub mod sequence;
