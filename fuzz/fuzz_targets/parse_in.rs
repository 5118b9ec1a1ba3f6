#![no_main]

use jiff::tz::TimeZone;
use libfuzzer_sys::fuzz_target;

// Two properties: no input panics the parser, and the canonical
// rendering of anything it accepts parses back to the same instant.
fuzz_target!(|input: &str| {
    let Ok(parsed) = dateparse::parse_in(input, &TimeZone::UTC) else {
        return;
    };
    let shown = parsed
        .with_time_zone(TimeZone::UTC)
        .strftime("%Y-%m-%d %H:%M:%S%.f %z %Z")
        .to_string();
    match dateparse::parse_in(&shown, &TimeZone::UTC) {
        Ok(again) => assert_eq!(
            parsed.timestamp(),
            again.timestamp(),
            "canonical form {shown:?} of {input:?} moved"
        ),
        Err(err) => panic!("canonical form {shown:?} of {input:?} failed to reparse: {err}"),
    }
});
