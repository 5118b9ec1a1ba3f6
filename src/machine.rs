// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The layout recognizer.
//!
//! A single left-to-right scan classifies each character and drives a
//! deterministic state machine. States are named after the shape of the
//! prefix consumed so far (`DigitDash` is `2006-`, `DigitDashDigitDash`
//! is `2006-01-`, and so on). The first separator commits the layout:
//! four digits before a `-` or `/` make the leading run a year, one or
//! two digits before a `/` or `.` make it a month, one or two digits
//! before a space make it a day. There is no backtracking; a character
//! with no transition out of the current state fails the parse.
//!
//! The machine never converts anything to a number. It only records
//! byte spans for the fields it has seen, plus a handful of flags, and
//! leaves interpretation to the resolver.

use crate::classify::{classify, CharClass, Span};
use crate::resolve::month_from_name;
use crate::ParseError;

/// Field spans and flags produced by a successful scan.
#[derive(Debug, Default)]
pub(crate) struct Recognized<'a> {
    pub(crate) input: &'a str,
    pub(crate) year: Option<Span>,
    pub(crate) month: Option<Span>,
    pub(crate) day: Option<Span>,
    pub(crate) hour: Option<Span>,
    pub(crate) minute: Option<Span>,
    pub(crate) second: Option<Span>,
    pub(crate) fraction: Option<Span>,
    pub(crate) zone_name: Option<Span>,
    pub(crate) zone_offset: Option<Span>,
    pub(crate) month_is_alpha: bool,
    pub(crate) am: bool,
    pub(crate) pm: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// Leading digit run; the first separator decides what it was.
    Digit,
    /// `2006-`
    DigitDash,
    /// `2006-0…` month digits
    DigitDashDigit,
    /// `2013-F…` month name
    DigitDashAlpha,
    /// `2006-01-`
    DigitDashDigitDash,
    /// `2006-01-0…` day digits
    DigitDashDigitDashDigit,
    /// `2014/` or `3/`
    DigitSlash,
    DigitSlashDigit,
    DigitSlashDigitSlash,
    DigitSlashDigitSlashDigit,
    /// `3.` — dotted dates are always month first
    DigitDot,
    DigitDotDigit,
    DigitDotDigitDot,
    DigitDotDigitDotDigit,
    /// `2014年`
    DigitCnYear,
    DigitCnYearDigit,
    /// `…04月`
    DigitCnMonth,
    DigitCnMonthDigit,
    /// `…08日`
    DigitCnDay,
    /// Leading alphabetic token: a weekday or a month name.
    Alpha,
    /// Weekday (and optional comma) consumed; day digits or a month
    /// name follow.
    WeekdayWs,
    /// Month-name run after a weekday (`Mon Jan …`).
    WeekdayAlpha,
    /// Day digit run after a weekday (`Monday, 02 …`).
    DayDigit,
    /// Separator after the day; a month name is required next.
    DayAlphaSep,
    /// Month-name run after the day (`7 oct …`, `02-Jan-…`).
    DayAlpha,
    /// Separator after a day-first month name; the year follows.
    DayAlphaYearSep,
    DayAlphaYear,
    /// Month name consumed, day expected. Extra spaces are tolerated
    /// for `Jan  2` style padding.
    MonthWs,
    /// Day digit run in month-first layouts (`oct 7…`).
    MonthDay,
    /// `oct 7,` — year follows, possibly as `'70`.
    MonthDayComma,
    MonthDayApos,
    MonthDayAposYear,
    MonthDayYear,
    /// `Jul 03 ` — either a year or a clock comes next.
    MonthDayWs,
    /// Ambiguous digit run after month and day: an `:` makes it the
    /// hour, a separator makes it the year.
    MonthDayNum,
    /// Date complete; a clock may follow.
    WsBeforeTime,
    TimeHour,
    TimeHourColon,
    TimeMin,
    TimeMinColon,
    TimeSec,
    /// `.` or `,` after the seconds.
    TimeSecDecimal,
    TimeFrac,
    /// Trailing `Z`.
    TimeZulu,
    /// Letters glued to the clock (`10:09am`); only a meridiem fits.
    TimeAmPm,
    /// Between post-clock tokens.
    TimeWs,
    /// `+0100`, `-07:00`
    TimeWsOffset,
    /// `MST`, `PM`, `UTC` — possibly with a glued offset (`GMT+0100`).
    TimeWsAlpha,
    /// Trailing four-digit year (`… 15:04:05 MST 2006`).
    TimeWsYear,
    /// Inside `(GMT Daylight Time)`.
    ZoneBracket,
    AfterBracket,
}

/// Scan `input` and record the field spans of the committed layout.
///
/// The caller is expected to have trimmed the input and to have routed
/// all-digit strings of non-calendar length through the epoch shortcut.
pub(crate) fn recognize(input: &str) -> Result<Recognized<'_>, ParseError> {
    let mut r = Recognized {
        input,
        ..Recognized::default()
    };
    let mut state = State::Start;
    // Start of the run or token currently being consumed.
    let mut mark = 0usize;
    // Committed by the first separator: `2014/` leads with the year,
    // `3/` leads with the month.
    let mut slash_year_first = false;

    for (i, c) in input.char_indices() {
        let class = classify(c);
        state = match state {
            State::Start => match class {
                CharClass::Digit => {
                    mark = i;
                    State::Digit
                }
                cl if cl.is_letter() => {
                    mark = i;
                    State::Alpha
                }
                CharClass::Space => State::Start,
                _ => return Err(ParseError::UnknownFormat),
            },

            State::Digit => match class {
                CharClass::Digit => State::Digit,
                CharClass::Dash => match i - mark {
                    4 => {
                        set(&mut r.year, mark, i)?;
                        State::DigitDash
                    }
                    1 | 2 => {
                        set(&mut r.day, mark, i)?;
                        State::DayAlphaSep
                    }
                    _ => return Err(ParseError::UnknownFormat),
                },
                CharClass::Slash => match i - mark {
                    4 => {
                        set(&mut r.year, mark, i)?;
                        slash_year_first = true;
                        State::DigitSlash
                    }
                    1 | 2 => {
                        set(&mut r.month, mark, i)?;
                        State::DigitSlash
                    }
                    _ => return Err(ParseError::UnknownFormat),
                },
                CharClass::Dot if i - mark <= 2 => {
                    set(&mut r.month, mark, i)?;
                    State::DigitDot
                }
                CharClass::Space if i - mark <= 2 => {
                    set(&mut r.day, mark, i)?;
                    State::DayAlphaSep
                }
                CharClass::CjkYear if i - mark == 4 => {
                    set(&mut r.year, mark, i)?;
                    State::DigitCnYear
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::DigitDash => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitDashDigit
                }
                cl if cl.is_letter() => {
                    mark = i;
                    State::DigitDashAlpha
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDashDigit => match class {
                CharClass::Digit => State::DigitDashDigit,
                CharClass::Dash => {
                    set(&mut r.month, mark, i)?;
                    State::DigitDashDigitDash
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDashAlpha => match class {
                cl if cl.is_letter() => State::DigitDashAlpha,
                CharClass::Dash => {
                    if month_from_name(&input[mark..i]).is_none() {
                        return Err(ParseError::UnknownFormat);
                    }
                    set(&mut r.month, mark, i)?;
                    r.month_is_alpha = true;
                    State::DigitDashDigitDash
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDashDigitDash => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitDashDigitDashDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDashDigitDashDigit => match class {
                CharClass::Digit => State::DigitDashDigitDashDigit,
                CharClass::Space | CharClass::UpperT => {
                    set(&mut r.day, mark, i)?;
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::DigitSlash => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitSlashDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitSlashDigit => match class {
                CharClass::Digit => State::DigitSlashDigit,
                CharClass::Slash => {
                    if slash_year_first {
                        set(&mut r.month, mark, i)?;
                    } else {
                        set(&mut r.day, mark, i)?;
                    }
                    State::DigitSlashDigitSlash
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitSlashDigitSlash => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitSlashDigitSlashDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitSlashDigitSlashDigit => match class {
                CharClass::Digit => State::DigitSlashDigitSlashDigit,
                CharClass::Space => {
                    if slash_year_first {
                        set(&mut r.day, mark, i)?;
                    } else {
                        set(&mut r.year, mark, i)?;
                    }
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::DigitDot => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitDotDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDotDigit => match class {
                CharClass::Digit => State::DigitDotDigit,
                CharClass::Dot => {
                    set(&mut r.day, mark, i)?;
                    State::DigitDotDigitDot
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDotDigitDot => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitDotDigitDotDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitDotDigitDotDigit => match class {
                CharClass::Digit => State::DigitDotDigitDotDigit,
                CharClass::Space => {
                    set(&mut r.year, mark, i)?;
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::DigitCnYear => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitCnYearDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitCnYearDigit => match class {
                CharClass::Digit => State::DigitCnYearDigit,
                CharClass::CjkMonth => {
                    set(&mut r.month, mark, i)?;
                    State::DigitCnMonth
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitCnMonth => match class {
                CharClass::Digit => {
                    mark = i;
                    State::DigitCnMonthDigit
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitCnMonthDigit => match class {
                CharClass::Digit => State::DigitCnMonthDigit,
                CharClass::CjkDay => {
                    set(&mut r.day, mark, i)?;
                    State::DigitCnDay
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DigitCnDay => match class {
                CharClass::Space => State::WsBeforeTime,
                _ => return Err(ParseError::UnknownFormat),
            },

            State::Alpha => match class {
                cl if cl.is_letter() => State::Alpha,
                CharClass::Comma | CharClass::Space => {
                    let token = &input[mark..i];
                    if is_weekday(token) {
                        State::WeekdayWs
                    } else if month_from_name(token).is_some() {
                        if class == CharClass::Comma {
                            return Err(ParseError::UnknownFormat);
                        }
                        set(&mut r.month, mark, i)?;
                        r.month_is_alpha = true;
                        State::MonthWs
                    } else {
                        return Err(ParseError::UnknownFormat);
                    }
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::WeekdayWs => match class {
                CharClass::Space | CharClass::Comma => State::WeekdayWs,
                CharClass::Digit => {
                    mark = i;
                    State::DayDigit
                }
                cl if cl.is_letter() => {
                    mark = i;
                    State::WeekdayAlpha
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::WeekdayAlpha => match class {
                cl if cl.is_letter() => State::WeekdayAlpha,
                CharClass::Space => {
                    if month_from_name(&input[mark..i]).is_none() {
                        return Err(ParseError::UnknownFormat);
                    }
                    set(&mut r.month, mark, i)?;
                    r.month_is_alpha = true;
                    State::MonthWs
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::DayDigit => match class {
                CharClass::Digit => State::DayDigit,
                CharClass::Space | CharClass::Dash => {
                    set(&mut r.day, mark, i)?;
                    State::DayAlphaSep
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DayAlphaSep => match class {
                CharClass::Space => State::DayAlphaSep,
                cl if cl.is_letter() => {
                    mark = i;
                    State::DayAlpha
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DayAlpha => match class {
                cl if cl.is_letter() => State::DayAlpha,
                CharClass::Space | CharClass::Dash => {
                    if month_from_name(&input[mark..i]).is_none() {
                        return Err(ParseError::UnknownFormat);
                    }
                    set(&mut r.month, mark, i)?;
                    r.month_is_alpha = true;
                    State::DayAlphaYearSep
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DayAlphaYearSep => match class {
                CharClass::Space => State::DayAlphaYearSep,
                CharClass::Digit => {
                    mark = i;
                    State::DayAlphaYear
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::DayAlphaYear => match class {
                CharClass::Digit => State::DayAlphaYear,
                CharClass::Space | CharClass::Comma => {
                    set(&mut r.year, mark, i)?;
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::MonthWs => match class {
                CharClass::Space => State::MonthWs,
                CharClass::Digit => {
                    mark = i;
                    State::MonthDay
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDay => match class {
                CharClass::Digit => State::MonthDay,
                CharClass::Comma => {
                    set(&mut r.day, mark, i)?;
                    State::MonthDayComma
                }
                CharClass::Space => {
                    set(&mut r.day, mark, i)?;
                    State::MonthDayWs
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDayComma => match class {
                CharClass::Space => State::MonthDayComma,
                CharClass::Digit => {
                    mark = i;
                    State::MonthDayYear
                }
                CharClass::Apostrophe => State::MonthDayApos,
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDayApos => match class {
                CharClass::Digit => {
                    mark = i;
                    State::MonthDayAposYear
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDayAposYear => match class {
                CharClass::Digit => State::MonthDayAposYear,
                CharClass::Space => {
                    set(&mut r.year, mark, i)?;
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDayYear => match class {
                CharClass::Digit => State::MonthDayYear,
                CharClass::Space => {
                    set(&mut r.year, mark, i)?;
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDayWs => match class {
                CharClass::Space => State::MonthDayWs,
                CharClass::Digit => {
                    mark = i;
                    State::MonthDayNum
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::MonthDayNum => match class {
                CharClass::Digit => State::MonthDayNum,
                CharClass::Colon => {
                    set(&mut r.hour, mark, i)?;
                    State::TimeHourColon
                }
                CharClass::Space if r.year.is_none() && matches!(i - mark, 2 | 4) => {
                    set(&mut r.year, mark, i)?;
                    State::WsBeforeTime
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::WsBeforeTime => match class {
                CharClass::Space => State::WsBeforeTime,
                CharClass::Digit => {
                    mark = i;
                    State::TimeHour
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::TimeHour => match class {
                CharClass::Digit => State::TimeHour,
                CharClass::Colon => {
                    set(&mut r.hour, mark, i)?;
                    State::TimeHourColon
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeHourColon => match class {
                CharClass::Digit => {
                    mark = i;
                    State::TimeMin
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeMin => match class {
                CharClass::Digit => State::TimeMin,
                CharClass::Colon => {
                    set(&mut r.minute, mark, i)?;
                    State::TimeMinColon
                }
                CharClass::Space => {
                    set(&mut r.minute, mark, i)?;
                    State::TimeWs
                }
                CharClass::UpperZ => {
                    set(&mut r.minute, mark, i)?;
                    set(&mut r.zone_offset, i, i + 1)?;
                    State::TimeZulu
                }
                CharClass::Plus | CharClass::Dash => {
                    set(&mut r.minute, mark, i)?;
                    mark = i;
                    State::TimeWsOffset
                }
                cl if cl.is_letter() => {
                    set(&mut r.minute, mark, i)?;
                    mark = i;
                    State::TimeAmPm
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeMinColon => match class {
                CharClass::Digit => {
                    mark = i;
                    State::TimeSec
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeSec => match class {
                CharClass::Digit => State::TimeSec,
                CharClass::Dot | CharClass::Comma => {
                    set(&mut r.second, mark, i)?;
                    State::TimeSecDecimal
                }
                CharClass::Space => {
                    set(&mut r.second, mark, i)?;
                    State::TimeWs
                }
                CharClass::UpperZ => {
                    set(&mut r.second, mark, i)?;
                    set(&mut r.zone_offset, i, i + 1)?;
                    State::TimeZulu
                }
                CharClass::Plus | CharClass::Dash => {
                    set(&mut r.second, mark, i)?;
                    mark = i;
                    State::TimeWsOffset
                }
                cl if cl.is_letter() => {
                    set(&mut r.second, mark, i)?;
                    mark = i;
                    State::TimeAmPm
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeSecDecimal => match class {
                CharClass::Digit => {
                    mark = i;
                    State::TimeFrac
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeFrac => match class {
                CharClass::Digit => State::TimeFrac,
                CharClass::Space => {
                    set(&mut r.fraction, mark, i)?;
                    State::TimeWs
                }
                CharClass::UpperZ => {
                    set(&mut r.fraction, mark, i)?;
                    set(&mut r.zone_offset, i, i + 1)?;
                    State::TimeZulu
                }
                CharClass::Plus | CharClass::Dash => {
                    set(&mut r.fraction, mark, i)?;
                    mark = i;
                    State::TimeWsOffset
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeZulu => match class {
                CharClass::Space => State::TimeWs,
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeAmPm => match class {
                cl if cl.is_letter() => State::TimeAmPm,
                CharClass::Space => {
                    close_meridiem(&mut r, &input[mark..i])?;
                    State::TimeWs
                }
                _ => return Err(ParseError::UnknownFormat),
            },

            State::TimeWs => match class {
                CharClass::Space => State::TimeWs,
                CharClass::Plus | CharClass::Dash => {
                    mark = i;
                    State::TimeWsOffset
                }
                CharClass::Digit => {
                    mark = i;
                    State::TimeWsYear
                }
                CharClass::OpenParen => {
                    mark = i + 1;
                    State::ZoneBracket
                }
                cl if cl.is_letter() => {
                    mark = i;
                    State::TimeWsAlpha
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeWsOffset => match class {
                CharClass::Digit | CharClass::Colon => State::TimeWsOffset,
                CharClass::Space => {
                    set(&mut r.zone_offset, mark, i)?;
                    State::TimeWs
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeWsAlpha => match class {
                cl if cl.is_letter() => State::TimeWsAlpha,
                CharClass::Space => {
                    close_zone_token(&mut r, mark, i)?;
                    State::TimeWs
                }
                CharClass::Plus | CharClass::Dash => {
                    close_zone_token(&mut r, mark, i)?;
                    mark = i;
                    State::TimeWsOffset
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::TimeWsYear => match class {
                CharClass::Digit => State::TimeWsYear,
                CharClass::Space => {
                    close_trailing_year(&mut r, mark, i)?;
                    State::TimeWs
                }
                _ => return Err(ParseError::UnknownFormat),
            },
            State::ZoneBracket => match class {
                CharClass::CloseParen => {
                    // A bracketed name may restate a zone already seen
                    // (`GMT+0100 (GMT Daylight Time)`); it replaces the
                    // name but never an offset.
                    r.zone_name = Some(Span::new(mark, i));
                    State::AfterBracket
                }
                CharClass::OpenParen => return Err(ParseError::UnknownFormat),
                _ => State::ZoneBracket,
            },
            State::AfterBracket => match class {
                CharClass::Space => State::TimeWs,
                _ => return Err(ParseError::UnknownFormat),
            },
        };
    }

    finish(&mut r, state, mark, slash_year_first)?;
    Ok(r)
}

/// End-of-input handling: close the pending run if the state accepts,
/// otherwise the layout never completed.
fn finish(
    r: &mut Recognized<'_>,
    state: State,
    mark: usize,
    slash_year_first: bool,
) -> Result<(), ParseError> {
    let input = r.input;
    let end = input.len();
    match state {
        State::Digit => match end - mark {
            // A bare year; other all-digit lengths have been routed to
            // the epoch shortcut before the scan.
            4 => set(&mut r.year, mark, end),
            8 => {
                set(&mut r.year, mark, mark + 4)?;
                set(&mut r.month, mark + 4, mark + 6)?;
                set(&mut r.day, mark + 6, end)
            }
            _ => Err(ParseError::UnknownFormat),
        },
        State::DigitDashDigit => set(&mut r.month, mark, end),
        State::DigitDashDigitDashDigit => set(&mut r.day, mark, end),
        State::DigitSlashDigitSlashDigit => {
            if slash_year_first {
                set(&mut r.day, mark, end)
            } else {
                set(&mut r.year, mark, end)
            }
        }
        State::DigitDotDigitDotDigit => set(&mut r.year, mark, end),
        State::DayAlphaYear | State::MonthDayYear | State::MonthDayAposYear => {
            set(&mut r.year, mark, end)
        }
        State::MonthDayNum => {
            if r.year.is_none() && matches!(end - mark, 2 | 4) {
                set(&mut r.year, mark, end)
            } else {
                Err(ParseError::UnknownFormat)
            }
        }
        State::TimeMin => set(&mut r.minute, mark, end),
        State::TimeSec => set(&mut r.second, mark, end),
        State::TimeFrac => set(&mut r.fraction, mark, end),
        State::TimeAmPm => close_meridiem(r, &input[mark..end]),
        State::TimeWsOffset => set(&mut r.zone_offset, mark, end),
        State::TimeWsAlpha => close_zone_token(r, mark, end),
        State::TimeWsYear => close_trailing_year(r, mark, end),
        State::DigitCnDay
        | State::TimeZulu
        | State::TimeWs
        | State::AfterBracket
        | State::WsBeforeTime => Ok(()),
        _ => Err(ParseError::UnknownFormat),
    }
}

fn set(slot: &mut Option<Span>, start: usize, end: usize) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::UnknownFormat);
    }
    *slot = Some(Span::new(start, end));
    Ok(())
}

/// A post-clock alphabetic token is either a meridiem or a zone name.
/// `PM` and `PST` share a first letter; the full token decides.
fn close_zone_token(r: &mut Recognized<'_>, start: usize, end: usize) -> Result<(), ParseError> {
    let input = r.input;
    let token = &input[start..end];
    match meridiem(token) {
        Some(pm) => {
            if pm {
                r.pm = true;
            } else {
                r.am = true;
            }
            Ok(())
        }
        None => set(&mut r.zone_name, start, end),
    }
}

fn close_meridiem(r: &mut Recognized<'_>, token: &str) -> Result<(), ParseError> {
    match meridiem(token) {
        Some(true) => {
            r.pm = true;
            Ok(())
        }
        Some(false) => {
            r.am = true;
            Ok(())
        }
        None => Err(ParseError::UnknownFormat),
    }
}

/// A digit run after the clock can only be a four-digit year, and only
/// when the layout has not produced one yet (`Mon Jan  2 15:04:05 MST
/// 2006`).
fn close_trailing_year(r: &mut Recognized<'_>, start: usize, end: usize) -> Result<(), ParseError> {
    if r.year.is_some() || end - start != 4 {
        return Err(ParseError::UnknownFormat);
    }
    set(&mut r.year, start, end)
}

fn meridiem(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("pm") {
        Some(true)
    } else if token.eq_ignore_ascii_case("am") {
        Some(false)
    } else {
        None
    }
}

fn is_weekday(token: &str) -> bool {
    const NAMES: [&str; 14] = [
        "sun", "sunday", "mon", "monday", "tue", "tuesday", "wed", "wednesday", "thu", "thursday",
        "fri", "friday", "sat", "saturday",
    ];
    NAMES.iter().any(|name| token.eq_ignore_ascii_case(name))
}
