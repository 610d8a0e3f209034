/// Shared parsing utilities for commands that take `prefix/value` arguments.
use crate::commands::index::Index;
use crate::core::error::ParseError;
use std::collections::HashMap;
use std::fmt;

/// Flag marking the start of a value, e.g. `p/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_PERSON_FLAG: Prefix = Prefix::new("p/");
pub const PREFIX_EVENT_FLAG: Prefix = Prefix::new("e/");

/// Values collected per prefix, in order of appearance, plus the preamble.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.value(prefix).is_some()
    }

    fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }
}

/// Splits `args` into a preamble and `prefix -> value` pairs.
///
/// A prefix only counts at the start of the input or directly after
/// whitespace, so `ap/1` carries no `p/` flag. Values run up to the next
/// recognised prefix and are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .map(|(pos, _)| pos)
                .filter(|&pos| starts_token(args, pos))
                .map(move |pos| (pos, prefix))
                .collect::<Vec<_>>()
        })
        .collect();
    // Longest prefix wins at a shared position; matches inside it are dropped
    positions.sort_by_key(|(pos, prefix)| (*pos, std::cmp::Reverse(prefix.as_str().len())));
    let mut token_end = 0;
    positions.retain(|(pos, prefix)| {
        if *pos < token_end {
            return false;
        }
        token_end = pos + prefix.as_str().len();
        true
    });

    let mut map = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    map.preamble = args[..preamble_end].trim().to_string();

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map_or(args.len(), |(next, _)| *next)
            .max(value_start);
        map.put(*prefix, args[value_start..value_end].trim().to_string());
    }

    log::debug!(
        "tokenize: preamble='{}', flags={}",
        map.preamble,
        positions.len()
    );
    map
}

fn starts_token(args: &str, pos: usize) -> bool {
    args[..pos]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}

/// Parses a 1-based index. Surrounding whitespace is ignored; a sign, zero or
/// anything that is not a plain decimal number is rejected.
pub fn parse_index(input: &str) -> Result<Index, ParseError> {
    let trimmed = input.trim();
    if trimmed.starts_with('+') {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}
