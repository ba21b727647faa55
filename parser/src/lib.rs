#[macro_use]
extern crate pest_derive;

pub mod expr;
