use chrono::{TimeZone, Utc};
use spaniel::{Span, Spans};

fn main() {
    let at = |h, m| Utc.with_ymd_and_hms(2020, 9, 26, h, m, 0).unwrap();

    let meetings = Spans::from(vec![
        Span::new(at(10, 4), at(12, 13)),
        Span::new(at(14, 4), at(16, 13)),
        Span::new(at(11, 4), at(13, 13)),
    ]);
    println!("Meetings:\n{meetings}");
    println!("Clashes:\n{}", meetings.intersection());

    let day = Spans::from(vec![Span::new(at(9, 0), at(17, 0))]);
    let free = meetings
        .iter()
        .fold(day, |free, meeting| free.without(meeting));
    println!("Free:\n{free}");
    println!("Free time: {} min", free.duration().num_minutes());
}
