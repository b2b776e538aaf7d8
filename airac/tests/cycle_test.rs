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

use airac::{chronological, sort_chronologically, Cycle, Error, CYCLE_DURATION_DAYS};
use chrono::{NaiveDate, TimeDelta};

fn all_cycles() -> impl Iterator<Item = Cycle> {
    (0..=u16::MAX).map(Cycle::new)
}

#[test]
fn effective_date_maps_back_to_cycle() {
    for cycle in all_cycles() {
        assert_eq!(Cycle::from_date(&cycle.effective()), cycle);
    }

    // the last cycle expires with the wrapped next one
    for cycle in all_cycles().take(u16::MAX as usize) {
        assert_eq!(Cycle::from(cycle.expires()), cycle);
    }
}

#[test]
fn cycles_are_28_days_apart() {
    for cycle in all_cycles().take(u16::MAX as usize) {
        let duration = cycle.next().effective() - cycle.effective();
        assert_eq!(duration, TimeDelta::days(CYCLE_DURATION_DAYS.into()));
    }
}

#[test]
fn ordinal_is_within_year() {
    for cycle in all_cycles() {
        let ordinal = cycle.ordinal();
        assert!((1..=14).contains(&ordinal), "{cycle:?} has ordinal {ordinal}");
    }
}

#[test]
fn ident_round_trip() {
    let window = all_cycles().filter(|cycle| (1964..=2063).contains(&cycle.year()));

    for cycle in window {
        let ident = cycle.to_string();
        assert_eq!(ident.len(), 4);
        assert_eq!(ident.parse::<Cycle>(), Ok(cycle), "{ident} should parse");
    }
}

#[test]
fn century_of_ident() {
    let cycle = Cycle::must_parse("6401");
    assert_eq!((cycle.year(), cycle.ordinal()), (1964, 1));

    let cycle = Cycle::must_parse("0001");
    assert_eq!((cycle.year(), cycle.ordinal()), (2000, 1));

    let cycle = Cycle::must_parse("9913");
    assert_eq!(cycle.year(), 1999);
}

#[test]
fn invalid_ident() {
    for ident in ["123", "12345", "+101", "-101", "abcd", "", "2114", "1900"] {
        assert_eq!(
            ident.parse::<Cycle>(),
            Err(Error::InvalidIdent {
                ident: ident.to_string()
            }),
            "{ident:?} should be rejected"
        );
    }
}

#[test]
fn long_string_continues_previous_expiry() {
    fn dates(cycle: Cycle) -> (NaiveDate, NaiveDate) {
        let s = cycle.to_long_string();
        let effective = &s["YYOO (effective: ".len()..][..10];
        let expires = &s[s.len() - "YYYY-MM-DD)".len()..][..10];

        (
            effective.parse().expect("effective date should parse"),
            expires.parse().expect("expiry date should parse"),
        )
    }

    for cycle in all_cycles().skip(1).take(3000) {
        let (_, expired) = dates(cycle.previous());
        let (effective, _) = dates(cycle);
        assert_eq!(expired.succ_opt(), Some(effective));
    }
}

#[test]
fn chronological_sort() {
    // 7919 is a prime and permutes the cycles
    let mut cycles: Vec<Cycle> = (0..1000u32)
        .map(|i| Cycle::new((i * 7919 % 1000) as u16))
        .collect();
    let mut numbers: Vec<u16> = cycles.iter().map(|cycle| cycle.number()).collect();

    sort_chronologically(&mut cycles);
    numbers.sort();

    assert_eq!(
        cycles.iter().map(|cycle| cycle.number()).collect::<Vec<_>>(),
        numbers
    );
    assert!(cycles.windows(2).all(|w| chronological(&w[0], &w[1]).is_lt()));
    assert!(cycles.windows(2).all(|w| w[0].effective() < w[1].effective()));
}

#[test]
fn cycle_of_date() {
    let date = NaiveDate::from_ymd_opt(2021, 1, 28).expect("date should be valid");
    let cycle = Cycle::from(date);

    assert_eq!(cycle.to_string(), "2101");
    assert_eq!(
        cycle.to_long_string(),
        "2101 (effective: 2021-01-28; expires: 2021-02-24)"
    );
}
