use danibot_time::clock::Clock;
use danibot_time::display;
use danibot_time::Time;

#[test]
fn minutes_scenario() {
    let time = Time::from_total_minutes(125);
    assert_eq!((time.hour(), time.minutes(), time.seconds()), (2, 5, 0));
    assert_eq!(time.format(false).as_str(), "02:05");
    assert_eq!(time.to_total_minutes(), 125);
    assert_eq!(time.to_total_seconds(), 125 * 60);
}

#[test]
fn unset_value_is_still_printable() {
    let mut time = Time::from_hour_minute(14, 0);
    assert!(time.is_set());
    time.clear();
    assert!(!time.is_set());
    assert_eq!(time.format(false).as_str(), "99:99");
    assert_eq!(time.format(true).as_str(), "99:99:99");
}

#[test]
fn hour_minute_and_total_minutes_agree() {
    for hour in 0..24u8 {
        for minutes in 0..60u8 {
            let total = Time::from_hour_minute(hour, minutes).to_total_minutes();
            assert_eq!(Time::from_total_minutes(total), Time::from_hour_minute(hour, minutes));
        }
    }
}

#[test]
fn clock_runs_a_full_day() {
    let mut clock = Clock::new(Time::from_hour_minute(0, 0));
    for _ in 0..24 * 60 * 60 {
        clock.tick();
    }
    assert_eq!(clock.time(), Time::from_hour_minute(0, 0));
}

#[test]
fn display_follows_clock() {
    let mut clock = Clock::default();
    let unset = display::render(&clock.time());

    clock.add_minute();
    let set = display::render(&clock.time());
    assert_ne!(unset, set);
    assert_eq!(set, display::render(&Time::from_hour_minute(0, 1)));
}
