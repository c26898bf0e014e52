use snafu::Snafu;

/// Misuse of the command line. The display strings are what the harness greps
/// for, so they must stay exactly as they are.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Invalid param number!"))]
    InvalidParamNumber { count: usize },

    #[snafu(display("Invalid param!"))]
    InvalidParam { name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
