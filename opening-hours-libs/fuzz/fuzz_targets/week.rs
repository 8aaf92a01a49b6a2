#![no_main]
use libfuzzer_sys::fuzz_target;
use opening_hours_libs::{
    print::print_opening_hours,
    time::Event,
    week::{Week, WeekEvents},
    weekday::Weekday,
};

fuzz_target!(|data: [Vec<Event>; 7]| {
    #[cfg(feature = "log")]
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply();

    let events: WeekEvents = Weekday::ALL.into_iter().zip(data).collect();

    if let Ok(week) = Week::from_events(&events) {
        let days = week.into_days();

        assert_eq!(days.len(), 7, "Every day should be present");
        for (day, expected) in days.iter().zip(Weekday::ALL) {
            assert_eq!(day.day_of_week, expected, "Days should be ordered Monday to Sunday");
            assert_eq!(day.is_open, !day.hours.is_empty(), "Open days should have hours");
            assert!(
                day.hours.iter().all(|shift| shift.open != shift.close),
                "Shifts should not be empty: {:?}",
                day
            );
        }

        let printed = print_opening_hours(&days);
        assert_eq!(printed.lines().count(), 7);
    }
});
