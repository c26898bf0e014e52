pub mod components;
pub mod dispatch;
pub mod triggers;
pub mod utils;

extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate serde_derive;

pub use crate::components::config::Config;
pub use crate::components::error::{Error, Result};
pub use crate::components::fault::FaultKind;
pub use crate::components::report::{ExpectedReport, Security};
pub use crate::dispatch::{parse_args, run, trigger};
