use crate::error::{ParseOptionsError, Result};
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Switches for the passes of `DeltaCalculator::compute_delta`.
    ///
    /// The empty set runs every pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DeltaOptions: u8 {
        /// Skip the removed pass; `removed_indices` stays empty.
        const IGNORE_REMOVE = 0b01;
        /// Skip the added/moved pass; `added_indices` and
        /// `moved_index_pairs` stay empty.
        const IGNORE_INSERT_AND_MOVE = 0b10;
    }
}

const NAMES: [(&str, DeltaOptions); 2] = [
    ("IgnoreRemove", DeltaOptions::IGNORE_REMOVE),
    ("IgnoreInsertAndMove", DeltaOptions::IGNORE_INSERT_AND_MOVE),
];

impl Default for DeltaOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl DeltaOptions {
    /// Parses a list of flag names separated by `,` or `|`.
    ///
    /// Names are matched ignoring case, `-` and `_`, so `IgnoreRemove`,
    /// `ignore-remove` and `IGNORE_REMOVE` are the same flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use listdelta::DeltaOptions;
    ///
    /// let options = DeltaOptions::try_parse("ignore-remove").unwrap();
    /// assert_eq!(options, DeltaOptions::IGNORE_REMOVE);
    /// assert!(DeltaOptions::try_parse("").unwrap().is_empty());
    /// ```
    pub fn try_parse(s: &str) -> Result<Self> {
        let mut options = Self::empty();

        for name in s.split([',', '|']).map(str::trim).filter(|n| !n.is_empty()) {
            let key = normalize(name);
            let flag = NAMES
                .iter()
                .find(|(known, _)| normalize(known) == key)
                .map(|(_, flag)| *flag)
                .ok_or_else(|| ParseOptionsError::UnknownFlag(name.to_string()))?;
            options |= flag;
        }

        Ok(options)
    }

    pub fn ignores_remove(&self) -> bool {
        self.contains(Self::IGNORE_REMOVE)
    }

    pub fn ignores_insert_and_move(&self) -> bool {
        self.contains(Self::IGNORE_INSERT_AND_MOVE)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for DeltaOptions {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl fmt::Display for DeltaOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();
        write!(f, "{}", names.join(", "))
    }
}
