// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! AIRAC cycles.
//!
//! Aeronautical data is published in cycles of 28 days defined by the
//! Aeronautical Information Regulation And Control (AIRAC). This crate
//! provides the [`Cycle`] to convert between dates, the `YYOO` identifier of a
//! cycle and its number since the [`EPOCH`].
//!
//! # Examples
//!
//! Lets find the cycle that is effective at a date and print its validity:
//!
//! ```
//! use airac::Cycle;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
//! let cycle = Cycle::from(date);
//!
//! println!("{}", cycle.to_long_string()); // => "2101 (effective: 2021-01-28; expires: 2021-02-24)"
//! assert_eq!(cycle.to_string(), "2101");
//! ```
//!
//! Cycles are ordered chronologically and can be parsed from their
//! identifier:
//!
//! ```
//! use airac::Cycle;
//!
//! # fn main() -> Result<(), airac::Error> {
//! let mut cycles = ["2102", "9913", "0001"]
//!     .into_iter()
//!     .map(str::parse::<Cycle>)
//!     .collect::<Result<Vec<_>, _>>()?;
//! cycles.sort();
//!
//! let idents: Vec<String> = cycles.iter().map(Cycle::to_string).collect();
//! assert_eq!(idents, ["9913", "0001", "2102"]);
//! # Ok(())
//! # }
//! ```

mod cycle;
mod error;

pub use cycle::*;
pub use error::Error;
