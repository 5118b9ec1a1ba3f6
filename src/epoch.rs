// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The Unix-epoch shortcut.
//!
//! An input that is nothing but digits never reaches the layout
//! recognizer. Its length picks the precision: ten digits are seconds,
//! thirteen milliseconds, sixteen microseconds, nineteen nanoseconds.
//! Four and eight digits are calendar shapes (`2014`, `20140601`) and
//! are left for the recognizer; every other length is a mistake, as is
//! a leading minus.

use jiff::Timestamp;

use crate::ParseError;

/// Intercept all-digit input. Returns `None` when the input is not a
/// candidate (not all digits, or one of the calendar lengths).
pub(crate) fn parse(input: &str) -> Option<Result<Timestamp, ParseError>> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() != input.len() {
        return Some(Err(ParseError::NegativeEpoch));
    }
    match digits.len() {
        4 | 8 => None,
        10 => Some(number(digits).and_then(|n| Timestamp::from_second(n).map_err(Into::into))),
        13 => Some(number(digits).and_then(|n| Timestamp::from_millisecond(n).map_err(Into::into))),
        16 => Some(number(digits).and_then(|n| Timestamp::from_microsecond(n).map_err(Into::into))),
        19 => Some(
            digits
                .parse::<i128>()
                .map_err(|_| ParseError::EpochLength(19))
                .and_then(|n| Timestamp::from_nanosecond(n).map_err(Into::into)),
        ),
        n => Some(Err(ParseError::EpochLength(n))),
    }
}

fn number(digits: &str) -> Result<i64, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::EpochLength(digits.len()))
}
