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

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// The date at which the first cycle became effective, at midnight UTC.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1901, 1, 10) {
    Some(date) => date,
    None => panic!("AIRAC epoch is not a valid date"),
};

/// The number of days a cycle is effective.
pub const CYCLE_DURATION_DAYS: u32 = 28;

/// Length of the `YYOO` identifier.
const IDENT_LENGTH: usize = 4;

/// Two digit years up to this year are counted into the 2000s.
const PIVOT_YEAR: i32 = 1963;

/// An Aeronautical Information Regulation And Control (AIRAC) cycle.
///
/// A cycle is the number of 28-day periods elapsed since the [`EPOCH`]. It
/// becomes [effective] at midnight UTC and lasts until the next cycle becomes
/// effective. Within its year a cycle is identified by the `YYOO` code, i.e.
/// the last two digits of the [year] and the [ordinal] of the cycle, which is
/// what [`Display`] prints and [`FromStr`] parses.
///
/// The cycle is stored as `u16`, which limits the representable cycles to
/// those effective up to January 6925. Arithmetic beyond this bound or before
/// the epoch wraps around silently.
///
/// # Examples
///
/// ```
/// use airac::Cycle;
/// use chrono::NaiveDate;
///
/// # fn main() -> Result<(), airac::Error> {
/// let cycle: Cycle = "2101".parse()?;
/// assert_eq!(cycle.year(), 2021);
/// assert_eq!(cycle.ordinal(), 1);
///
/// let date = NaiveDate::from_ymd_opt(2021, 2, 10).unwrap();
/// assert_eq!(Cycle::from(date), cycle);
/// # Ok(())
/// # }
/// ```
///
/// [effective]: Cycle::effective
/// [year]: Cycle::year
/// [ordinal]: Cycle::ordinal
/// [`Display`]: fmt::Display
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cycle(u16);

impl Cycle {
    /// Creates the cycle that is the `number`th cycle since the [`EPOCH`].
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// Returns the number of cycles since the [`EPOCH`].
    pub const fn number(&self) -> u16 {
        self.0
    }

    /// Returns the cycle that is effective at `date`.
    ///
    /// Dates before the [`EPOCH`] or after the representable range return
    /// wrapped, i.e. wrong, cycles.
    pub fn from_date<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        let days = (date.naive_utc() - EPOCH.and_time(NaiveTime::MIN)).num_days();

        if days < 0 {
            debug!("{} is before the AIRAC epoch {EPOCH}", date.naive_utc());
        }

        // truncates towards the epoch and wraps into the u16 range
        Self((days / i64::from(CYCLE_DURATION_DAYS)) as u16)
    }

    /// Returns the cycle that is identified by `ident`.
    ///
    /// Same as [`str::parse`] but panics if the identifier is invalid. Use it
    /// only with identifiers known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `ident` is not a valid `YYOO` identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// # use airac::Cycle;
    /// let cycle = Cycle::must_parse("6401");
    /// assert_eq!(cycle.year(), 1964);
    /// ```
    pub fn must_parse(ident: &str) -> Self {
        match ident.parse() {
            Ok(cycle) => cycle,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the date at which this cycle becomes effective at midnight UTC.
    pub fn effective(&self) -> DateTime<Utc> {
        self.effective_date().and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns the last day at which this cycle is effective.
    pub fn expires(&self) -> NaiveDate {
        self.next().effective_date() - Days::new(1)
    }

    /// Returns the year of the cycle's effective date.
    pub fn year(&self) -> i32 {
        self.effective_date().year()
    }

    /// Returns the position of the cycle within its year, starting at 1.
    ///
    /// Mostly a year has 13 cycles. If the first cycle of a year becomes
    /// effective in the first days of January, the year ends with a 14th cycle
    /// that starts on December 30 or 31.
    pub fn ordinal(&self) -> u32 {
        self.effective_date().ordinal0() / CYCLE_DURATION_DAYS + 1
    }

    /// Returns the cycle that follows this one.
    pub const fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the cycle that precedes this one.
    pub const fn previous(&self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    /// Returns `true` if the cycle is effective at `date`.
    pub fn contains<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> bool {
        let date = date.with_timezone(&Utc);
        let effective = self.effective();
        let end = effective + Days::new(CYCLE_DURATION_DAYS.into());

        effective <= date && date < end
    }

    /// Returns the identifier with the effective and expiry date.
    ///
    /// # Examples
    ///
    /// ```
    /// # use airac::Cycle;
    /// let cycle = Cycle::must_parse("2101");
    /// assert_eq!(
    ///     cycle.to_long_string(),
    ///     "2101 (effective: 2021-01-28; expires: 2021-02-24)"
    /// );
    /// ```
    pub fn to_long_string(&self) -> String {
        format!(
            "{self} (effective: {}; expires: {})",
            self.effective_date().format("%Y-%m-%d"),
            self.expires().format("%Y-%m-%d")
        )
    }

    fn effective_date(&self) -> NaiveDate {
        EPOCH + Days::new(u64::from(CYCLE_DURATION_DAYS) * u64::from(self.0))
    }
}

impl From<NaiveDate> for Cycle {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(&date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl From<u16> for Cycle {
    fn from(number: u16) -> Self {
        Self(number)
    }
}

impl From<Cycle> for u16 {
    fn from(cycle: Cycle) -> Self {
        cycle.0
    }
}

/// Parses the `YYOO` identifier of a cycle.
///
/// Identifiers from `6401` to `9913` are cycles of the years 1964 to 1999 and
/// identifiers from `0001` to `6313` cycles of the years 2000 to 2063. Leading
/// and trailing whitespace is ignored.
impl FromStr for Cycle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident = s.trim();
        let invalid = || Error::InvalidIdent {
            ident: ident.to_string(),
        };

        let (year, ordinal) = parse_ident(ident.as_bytes()).ok_or_else(invalid)?;
        trace!("AIRAC id {ident} resolves to year {year} and ordinal {ordinal}");

        let last_of_previous_year = NaiveDate::from_ymd_opt(year - 1, 12, 31)
            .map(Self::from)
            .ok_or_else(invalid)?;
        let cycle = Self(last_of_previous_year.0.wrapping_add(ordinal));

        if cycle.year() != year {
            return Err(invalid());
        }

        Ok(cycle)
    }
}

impl TryFrom<&str> for Cycle {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.year() % 100, self.ordinal())
    }
}

/// Returns the year and ordinal of a `YYOO` identifier.
fn parse_ident(bytes: &[u8]) -> Option<(i32, u16)> {
    if bytes.len() != IDENT_LENGTH || matches!(bytes[0], b'+' | b'-') {
        return None;
    }

    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let yy = i32::from(bytes[0] & 0x0F) * 10 + i32::from(bytes[1] & 0x0F);
    let ordinal = u16::from(bytes[2] & 0x0F) * 10 + u16::from(bytes[3] & 0x0F);

    let mut year = yy + 1900;
    if year <= PIVOT_YEAR {
        year += 100;
    }

    Some((year, ordinal))
}

/// Compares two cycles chronologically.
///
/// # Examples
///
/// ```
/// use airac::{chronological, Cycle};
///
/// let mut cycles = vec![Cycle::must_parse("2103"), Cycle::must_parse("2014")];
/// cycles.sort_by(chronological);
/// assert_eq!(cycles[0].to_string(), "2014");
/// ```
pub fn chronological(a: &Cycle, b: &Cycle) -> Ordering {
    a.0.cmp(&b.0)
}

/// Sorts the cycles from the oldest to the latest.
pub fn sort_chronologically(cycles: &mut [Cycle]) {
    cycles.sort_by(chronological);
}
