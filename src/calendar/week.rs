use serde::{Deserialize, Serialize};

use crate::calendar::date::CalendarDate;

/// Whether an academic week is odd or even. On the wire the backend uses
/// `1` for odd and `0` for even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of_week(week_number: i64) -> Self {
        if week_number.rem_euclid(2) == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Parity::Odd => 1,
            Parity::Even => 0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Parity::Odd => Parity::Even,
            Parity::Even => Parity::Odd,
        }
    }

    /// Adjective used in headings: "нечётная" / "чётная".
    pub fn label(self) -> &'static str {
        match self {
            Parity::Odd => "нечётная",
            Parity::Even => "чётная",
        }
    }
}

impl From<Parity> for u8 {
    fn from(parity: Parity) -> Self {
        parity.code()
    }
}

impl TryFrom<u8> for Parity {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Parity::Odd),
            0 => Ok(Parity::Even),
            other => Err(format!("week parity must be 0 or 1, got {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekInfo {
    pub week_number: i64,
    pub parity: Parity,
}

/// Academic week of `date`, counting the week that contains
/// `semester_start` as week 1. Dates before the start give week 0 or less.
pub fn week_info(date: CalendarDate, semester_start: CalendarDate) -> WeekInfo {
    let days_since_start = date.days_since(semester_start);
    let week_number = days_since_start.div_euclid(7) + 1;

    WeekInfo {
        week_number,
        parity: Parity::of_week(week_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn semester_start() -> CalendarDate {
        date(2025, 9, 1)
    }

    #[test]
    fn semester_start_is_odd_week_one() {
        let info = week_info(semester_start(), semester_start());
        assert_eq!(info, WeekInfo { week_number: 1, parity: Parity::Odd });
    }

    #[test]
    fn seventh_day_starts_week_two() {
        assert_eq!(week_info(date(2025, 9, 7), semester_start()).week_number, 1);
        assert_eq!(week_info(date(2025, 9, 8), semester_start()).week_number, 2);
        assert_eq!(week_info(date(2025, 9, 8), semester_start()).parity, Parity::Even);
    }

    #[test]
    fn october_first_is_in_odd_week_five() {
        let info = week_info(date(2025, 10, 1), semester_start());
        assert_eq!(info.week_number, 5);
        assert_eq!(info.parity, Parity::Odd);
    }

    #[test]
    fn day_before_start_is_week_zero() {
        let info = week_info(date(2025, 8, 31), semester_start());
        assert_eq!(info.week_number, 0);
        assert_eq!(info.parity, Parity::Even);
    }

    #[test]
    fn eight_days_before_start_is_odd_week_minus_one() {
        let info = week_info(date(2025, 8, 24), semester_start());
        assert_eq!(info.week_number, -1);
        assert_eq!(info.parity, Parity::Odd);
    }

    #[test]
    fn week_count_survives_clock_change() {
        // 26 Oct 2025 is the end of daylight saving time in Europe.
        assert_eq!(week_info(date(2025, 10, 27), semester_start()).week_number, 9);
        assert_eq!(week_info(date(2025, 10, 26), semester_start()).week_number, 8);
    }

    #[test]
    fn parity_serializes_as_backend_code() {
        assert_eq!(serde_json::to_string(&Parity::Odd).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Parity>("0").unwrap(), Parity::Even);
        assert!(serde_json::from_str::<Parity>("2").is_err());
    }

    proptest! {
        #[test]
        fn week_advances_every_seven_days(offset in -2_000i64..2_000) {
            let d = semester_start().add_days(offset).unwrap();
            let later = d.add_days(7).unwrap();
            let before = week_info(d, semester_start());
            let after = week_info(later, semester_start());

            prop_assert_eq!(after.week_number, before.week_number + 1);
            prop_assert_eq!(after.parity, before.parity.flipped());
        }

        #[test]
        fn parity_matches_week_number(offset in -2_000i64..2_000) {
            let info = week_info(semester_start().add_days(offset).unwrap(), semester_start());
            prop_assert_eq!(info.parity == Parity::Odd, info.week_number.rem_euclid(2) == 1);
        }
    }
}
