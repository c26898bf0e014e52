//! One function per fault class. Each of them is broken on purpose: they are
//! only ever called to make a runtime detector (or the Rust runtime itself)
//! report the fault they are named after.

pub mod arith;
pub mod global;
pub mod heap;
pub mod null;
pub mod stack;
