//! The cyclic calendar generator.
//!
//! An alternative, fixed-length year structure laid over the Gregorian
//! calendar: 4 quarters of 13 weeks each (52 weeks of 7 days), grouped into
//! 3 cycles of 4 weeks per quarter, with the 13th week of every quarter
//! reserved as a reset week. The year is anchored to the Monday of the ISO
//! week containing January 4th, so week 1 lines up with ISO week 1. Years
//! where 52 seven-day weeks fall short of the next year's anchor get one
//! trailing "prep" week that absorbs the remainder.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::interval::weekday_index;

/// Sentinel for the cycle fields of reset and prep weeks.
pub const NO_CYCLE: i32 = -1;

const WEEKS_PER_QUARTER: u32 = 13;
const WEEKS_PER_CYCLE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekKind {
    /// A regular week inside one of the quarter's three 4-week cycles.
    Standard,
    /// The 13th week of a quarter, exempt from cycle classification.
    Reset,
    /// The optional 53rd week bridging to the next year's anchor.
    Prep,
}

/// One week of the cyclic year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// 1-based week number, global across the year (1..=53).
    pub week_number: u32,
    /// The calendar days covered by this week, in order.
    pub days: Vec<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: WeekKind,
    /// 0..=2 for standard weeks, [`NO_CYCLE`] for reset and prep weeks.
    pub cycle_index: i32,
    /// 0..=3 for standard weeks, [`NO_CYCLE`] for reset and prep weeks.
    pub week_in_cycle: i32,
    /// True exactly for standard weeks at position 1 or 3 of their cycle.
    pub is_check_in: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quarter {
    /// 1-based quarter number.
    pub number: u32,
    pub weeks: Vec<Week>,
}

/// A full cyclic year: 4 quarters of 13 weeks, plus at most one prep week
/// appended to the last quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclicYear {
    pub year: i32,
    pub quarters: Vec<Quarter>,
}

/// Monday of the ISO week containing January 4th of `year`: the first day
/// of both ISO week 1 and the cyclic year.
pub fn year_anchor(year: i32) -> CoreResult<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or(CoreError::YearOutOfRange(year))?;
    Ok(jan4 - Duration::days(weekday_index(jan4) as i64))
}

/// Generate the cyclic structure for `year`.
///
/// Deterministic and pure: the same `year` always yields an identical
/// structure. Works for any year within chrono's calendar range; nothing is
/// special-cased beyond leap arithmetic and ISO alignment.
pub fn cyclic_year(year: i32) -> CoreResult<CyclicYear> {
    let mut current = year_anchor(year)?;
    let mut quarters = Vec::with_capacity(4);

    for q in 0..4u32 {
        let mut weeks = Vec::with_capacity(WEEKS_PER_QUARTER as usize);

        for w in 0..WEEKS_PER_QUARTER {
            let days: Vec<NaiveDate> = current.iter_days().take(7).collect();
            let week_number = q * WEEKS_PER_QUARTER + w + 1;

            let week = if w == WEEKS_PER_QUARTER - 1 {
                Week {
                    week_number,
                    days,
                    kind: WeekKind::Reset,
                    cycle_index: NO_CYCLE,
                    week_in_cycle: NO_CYCLE,
                    is_check_in: false,
                }
            } else {
                let week_in_cycle = w % WEEKS_PER_CYCLE;
                Week {
                    week_number,
                    days,
                    kind: WeekKind::Standard,
                    cycle_index: (w / WEEKS_PER_CYCLE) as i32,
                    week_in_cycle: week_in_cycle as i32,
                    is_check_in: week_in_cycle == 1 || week_in_cycle == 3,
                }
            };

            weeks.push(week);
            current += Duration::days(7);
        }

        quarters.push(Quarter {
            number: q + 1,
            weeks,
        });
    }

    // 52 seven-day weeks cover 364 days. When the next year's anchor is a
    // full week or more away, a single prep week absorbs the remainder;
    // a sub-week remainder is dropped.
    let next_anchor = year_anchor(year + 1)?;
    let gap = next_anchor.signed_duration_since(current).num_days();
    if gap >= 7 {
        let days: Vec<NaiveDate> = current.iter_days().take(gap as usize).collect();
        quarters
            .last_mut()
            .expect("four quarters were just generated")
            .weeks
            .push(Week {
                week_number: 4 * WEEKS_PER_QUARTER + 1,
                days,
                kind: WeekKind::Prep,
                cycle_index: NO_CYCLE,
                week_in_cycle: NO_CYCLE,
                is_check_in: false,
            });
    }

    Ok(CyclicYear { year, quarters })
}

impl CyclicYear {
    /// All weeks of the year in order, across quarter boundaries.
    pub fn weeks(&self) -> impl Iterator<Item = &Week> {
        self.quarters.iter().flat_map(|q| q.weeks.iter())
    }
}
