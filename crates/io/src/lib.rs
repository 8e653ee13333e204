//! Timecourse input for the timecourse analysis workspace.
//!
//! Reads one measured quantity over time from a delimited text file into a
//! [`Timecourse`]. Missing measurements are kept as NaN so that downstream
//! metrics can decide how to treat them.
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use timecourse_io::{CsvConfig, read_csv};
//!
//! let config = CsvConfig::default().with_value_column("AKT");
//! let tc = read_csv(Path::new("akt.csv"), &config).unwrap();
//! println!("{}: {} points", tc.label(), tc.len());
//! ```

mod error;
mod reader;
mod timecourse;
mod validate;

pub use error::IoError;
pub use reader::{CsvConfig, read_csv};
pub use timecourse::Timecourse;
