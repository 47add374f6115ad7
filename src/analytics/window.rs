//! Calendar date windows the trailing and weekly views are computed over.

use time::{Date, Duration, Month, OffsetDateTime, UtcOffset, Weekday};

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// The first date in the window.
    pub start: Date,
    /// The last date in the window.
    pub end: Date,
}

impl DateWindow {
    /// The `days` calendar days ending on `today`, today inclusive.
    pub fn trailing_days(today: Date, days: u8) -> Self {
        let start = today - Duration::days(i64::from(days.saturating_sub(1)));

        Self { start, end: today }
    }

    /// The Sunday to Saturday week that contains `date`.
    pub fn week_containing(date: Date) -> Self {
        let days_since_sunday = i64::from(date.weekday().number_days_from_sunday());
        let start = date - Duration::days(days_since_sunday);
        let end = start + Duration::days(6);

        Self { start, end }
    }

    /// The window of the same length that ends the day before this one starts.
    pub fn previous(self) -> Self {
        let length = self.end - self.start;
        let end = self.start - Duration::days(1);

        Self {
            start: end - length,
            end,
        }
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the window, oldest first.
    pub fn dates(self) -> impl Iterator<Item = Date> {
        std::iter::successors(Some(self.start), |date| date.next_day())
            .take_while(move |date| *date <= self.end)
    }
}

/// The calendar date of `date_time` as seen from `offset`.
///
/// Returns `None` if shifting to `offset` moves the date outside the range
/// `time` can represent, e.g. "9999-12-31T23:00:00Z" seen from UTC+13.
pub fn local_date(date_time: OffsetDateTime, offset: UtcOffset) -> Option<Date> {
    date_time
        .checked_to_offset(offset)
        .map(|date_time| date_time.date())
}

pub(super) fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

pub(super) fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

#[cfg(test)]
mod tests {
    use time::{
        Month, UtcOffset, Weekday,
        macros::{date, datetime},
    };

    use super::{DateWindow, local_date, month_abbrev, weekday_abbrev};

    #[test]
    fn trailing_days_includes_today() {
        let window = DateWindow::trailing_days(date!(2025 - 03 - 05), 7);

        assert_eq!(window.start, date!(2025 - 02 - 27));
        assert_eq!(window.end, date!(2025 - 03 - 05));
        assert_eq!(window.dates().count(), 7);
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2025-01-15 is a Wednesday.
        let window = DateWindow::week_containing(date!(2025 - 01 - 15));

        assert_eq!(window.start, date!(2025 - 01 - 12));
        assert_eq!(window.start.weekday(), Weekday::Sunday);
        assert_eq!(window.end, date!(2025 - 01 - 18));
    }

    #[test]
    fn week_containing_sunday_starts_that_day() {
        let window = DateWindow::week_containing(date!(2025 - 01 - 12));

        assert_eq!(window.start, date!(2025 - 01 - 12));
    }

    #[test]
    fn previous_week_ends_day_before() {
        let window = DateWindow::week_containing(date!(2025 - 01 - 15)).previous();

        assert_eq!(window.start, date!(2025 - 01 - 05));
        assert_eq!(window.end, date!(2025 - 01 - 11));
    }

    #[test]
    fn contains_is_inclusive() {
        let window = DateWindow {
            start: date!(2025 - 01 - 05),
            end: date!(2025 - 01 - 11),
        };

        assert!(window.contains(date!(2025 - 01 - 05)));
        assert!(window.contains(date!(2025 - 01 - 11)));
        assert!(!window.contains(date!(2025 - 01 - 12)));
        assert!(!window.contains(date!(2025 - 01 - 04)));
    }

    #[test]
    fn local_date_applies_offset() {
        let offset = UtcOffset::from_hms(13, 0, 0).unwrap();

        let date = local_date(datetime!(2025-01-15 20:00 UTC), offset);

        assert_eq!(date, Some(date!(2025 - 01 - 16)));
    }

    #[test]
    fn local_date_is_none_past_the_last_representable_date() {
        let offset = UtcOffset::from_hms(13, 0, 0).unwrap();

        let date = local_date(datetime!(9999-12-31 23:00 UTC), offset);

        assert_eq!(date, None);
    }

    #[test]
    fn dates_lists_every_day_in_window() {
        let window = DateWindow::trailing_days(date!(2025 - 01 - 15), 3);

        let dates: Vec<_> = window.dates().collect();

        assert_eq!(
            dates,
            vec![
                date!(2025 - 01 - 13),
                date!(2025 - 01 - 14),
                date!(2025 - 01 - 15)
            ]
        );
    }

    #[test]
    fn labels_are_three_letters() {
        assert_eq!(month_abbrev(Month::October), "Oct");
        assert_eq!(weekday_abbrev(Weekday::Thursday), "Thu");
    }
}
