use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Source of "now" for refresh timestamps and the live rate's day.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Today's calendar date in UTC
    fn today(&self) -> NaiveDate {
        utc_date(&self.now())
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// UTC calendar date of an instant, whatever zone it is expressed in
pub fn utc_date<Tz: TimeZone>(at: &DateTime<Tz>) -> NaiveDate {
    at.with_timezone(&Utc).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    struct Pinned(DateTime<Local>);

    impl Clock for Pinned {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    #[test]
    fn utc_date_ignores_local_calendar_day() {
        let sydney = FixedOffset::east_opt(10 * 3600).unwrap();
        let early_morning = sydney.with_ymd_and_hms(2025, 7, 4, 5, 0, 0).unwrap();
        assert_eq!(early_morning.date_naive(), NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(utc_date(&early_morning), NaiveDate::from_ymd_opt(2025, 7, 3).unwrap());

        let los_angeles = FixedOffset::west_opt(7 * 3600).unwrap();
        let late_evening = los_angeles.with_ymd_and_hms(2025, 7, 3, 22, 0, 0).unwrap();
        assert_eq!(utc_date(&late_evening), NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
    }

    #[test]
    fn today_uses_utc_date_of_now() {
        let instant = Utc.with_ymd_and_hms(2025, 7, 3, 23, 30, 0).unwrap();
        let clock = Pinned(instant.with_timezone(&Local));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 7, 3).unwrap());
        assert_eq!(std::rc::Rc::new(clock).today(), NaiveDate::from_ymd_opt(2025, 7, 3).unwrap());
    }
}
