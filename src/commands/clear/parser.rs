use crate::commands::index::Index;
use crate::commands::parsing::{
    parse_index, tokenize, ArgumentMultimap, PREFIX_EVENT_FLAG, PREFIX_PERSON_FLAG,
};
use crate::core::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

pub const MESSAGE_USAGE: &str = "clear: Clears all persons or events, or a range of them \
(identified by the index numbers used in the displayed list).\n\
Parameters: p/all | p/START-END | e/all | e/START-END\n\
Example: clear p/1-5";

const CLEAR_ALL: &str = "all";

lazy_static! {
    static ref VALIDATION_REGEX: Regex =
        Regex::new(r"^all$|^[0-9]*-[0-9]*$").expect("clear range pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Person,
    Event,
}

impl ClearTarget {
    pub fn plural(&self) -> &'static str {
        match self {
            ClearTarget::Person => "persons",
            ClearTarget::Event => "events",
        }
    }
}

/// Which entries of the target list are affected. `start <= end` is not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    All,
    Range { start: Index, end: Index },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearRequest {
    pub target: ClearTarget,
    pub mode: ClearMode,
}

impl ClearRequest {
    pub fn all(target: ClearTarget) -> Self {
        Self {
            target,
            mode: ClearMode::All,
        }
    }

    pub fn range(target: ClearTarget, start: Index, end: Index) -> Self {
        Self {
            target,
            mode: ClearMode::Range { start, end },
        }
    }

    pub fn range_start(&self) -> Option<Index> {
        match self.mode {
            ClearMode::All => None,
            ClearMode::Range { start, .. } => Some(start),
        }
    }

    pub fn range_end(&self) -> Option<Index> {
        match self.mode {
            ClearMode::All => None,
            ClearMode::Range { end, .. } => Some(end),
        }
    }
}

impl fmt::Display for ClearRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ClearMode::All => write!(f, "all {}", self.target.plural()),
            ClearMode::Range { start, end } => {
                write!(f, "{} {}-{}", self.target.plural(), start, end)
            }
        }
    }
}

/// Turns the text after `clear` into a [`ClearRequest`].
///
/// Accepted forms are `p/all`, `e/all`, `p/START-END` and `e/START-END`, with
/// exactly one flag and nothing before it. Every rejection is reported as
/// [`ParseError::InvalidFormat`] carrying [`MESSAGE_USAGE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ClearCommandParser;

impl ClearCommandParser {
    pub fn parse(&self, args: &str) -> Result<ClearRequest, ParseError> {
        let arg_map = tokenize(args, &[PREFIX_PERSON_FLAG, PREFIX_EVENT_FLAG]);
        let (target, clear_range) = Self::select_target(&arg_map)?;

        if !VALIDATION_REGEX.is_match(clear_range) {
            log::debug!("clear: rejected range '{}'", clear_range);
            return Err(invalid_format());
        }

        if clear_range == CLEAR_ALL {
            return Ok(ClearRequest::all(target));
        }

        // The pattern guarantees exactly one '-'
        let (begin, end) = clear_range.split_once('-').ok_or_else(invalid_format)?;

        // Empty digit groups ("5-", "-3") pass the pattern and fail here
        let start = parse_index(begin).map_err(|_| invalid_format())?;
        let end = parse_index(end).map_err(|_| invalid_format())?;

        Ok(ClearRequest::range(target, start, end))
    }

    fn select_target(arg_map: &ArgumentMultimap) -> Result<(ClearTarget, &str), ParseError> {
        if !arg_map.preamble().is_empty() {
            return Err(invalid_format());
        }

        match (
            arg_map.value(PREFIX_PERSON_FLAG),
            arg_map.value(PREFIX_EVENT_FLAG),
        ) {
            (Some(range), None) => Ok((ClearTarget::Person, range)),
            (None, Some(range)) => Ok((ClearTarget::Event, range)),
            _ => Err(invalid_format()),
        }
    }
}

fn invalid_format() -> ParseError {
    ParseError::invalid_format(MESSAGE_USAGE)
}
