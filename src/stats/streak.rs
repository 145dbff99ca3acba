use crate::model::ContributionDay;
use chrono::NaiveDate;

/// Consecutive active days ending at the most recent day. A zero count on
/// `today` does not break the streak since the day is not over yet.
pub fn current_streak(days: &[ContributionDay], today: NaiveDate) -> u32 {
    let mut iter = days.iter().rev().filter(|d| d.date <= today).peekable();

    if let Some(last) = iter.peek() {
        if last.date == today && !last.is_active() {
            iter.next();
        }
    }

    let mut streak = 0u32;
    let mut expected: Option<NaiveDate> = None;
    for day in iter {
        if !day.is_active() || expected.is_some_and(|e| e != day.date) {
            break;
        }
        streak += 1;
        expected = day.date.pred_opt();
    }
    streak
}

/// Longest run of active days; a missing date ends a run.
pub fn longest_streak(days: &[ContributionDay]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for day in days {
        if !day.is_active() {
            run = 0;
        } else if prev.and_then(|p| p.succ_opt()) == Some(day.date) && run > 0 {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
        prev = Some(day.date);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(end: NaiveDate, counts: &[u32]) -> Vec<ContributionDay> {
        let start = end - chrono::Duration::days(counts.len() as i64 - 1);
        start
            .iter_days()
            .zip(counts)
            .map(|(date, &c)| ContributionDay::new(date, c))
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn all_zero_calendar_has_no_streaks() {
        let days = series(today(), &[0; 30]);
        assert_eq!(current_streak(&days, today()), 0);
        assert_eq!(longest_streak(&days), 0);
    }

    #[test]
    fn zero_today_does_not_break_streak() {
        let days = series(today(), &[0, 2, 1, 3, 0]);
        assert_eq!(current_streak(&days, today()), 3);
    }

    #[test]
    fn active_today_counts() {
        let days = series(today(), &[1, 0, 4, 4]);
        assert_eq!(current_streak(&days, today()), 2);
    }

    #[test]
    fn zero_yesterday_ends_streak() {
        let days = series(today(), &[5, 5, 0, 0]);
        assert_eq!(current_streak(&days, today()), 0);
    }

    #[test]
    fn days_after_today_are_ignored() {
        let tomorrow = today().succ_opt().unwrap();
        let days = series(tomorrow, &[1, 1, 0]);
        assert_eq!(current_streak(&days, today()), 2);
    }

    #[test]
    fn longest_streak_finds_maximum_run() {
        let days = series(today(), &[1, 1, 0, 1, 1, 1, 0, 2]);
        assert_eq!(longest_streak(&days), 3);
    }

    #[test]
    fn missing_dates_break_streaks() {
        let day = |d: u32, c: u32| {
            ContributionDay::new(NaiveDate::from_ymd_opt(2026, 10, d).unwrap(), c)
        };
        let days = vec![day(10, 1), day(17, 1), day(18, 1)];
        assert_eq!(current_streak(&days, today()), 2);
        assert_eq!(longest_streak(&days), 2);
    }

    #[test]
    fn empty_series() {
        assert_eq!(current_streak(&[], today()), 0);
        assert_eq!(longest_streak(&[]), 0);
    }
}
