#![warn(clippy::pedantic)]
// Noisy doc/signature lints — would require annotating every pub function
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
// Style preference — keeping format!("{}", x) over format!("{x}") for readability with complex exprs
#![allow(clippy::uninlined_format_args)]
// Intentional casts around epoch-second timestamps and weekday indices
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// Module structure — schedule::ScheduleConfig etc. by design
#![allow(clippy::module_name_repetitions)]

pub mod channels;
pub mod cli;
pub mod commands;
pub mod config;
pub(crate) mod errors;
pub mod notify;
pub mod poll;
pub mod schedule;
pub mod state;
pub(crate) mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
