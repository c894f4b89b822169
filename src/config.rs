//! Collector tunables and command-line options
//!
//! [`Tunables`] carries the collector-wide values the heap sizing policy reads:
//! the address-space fraction and the granule size. [`CliOptions`] parses the
//! `vmspan` binary's arguments into tunables plus the optional ceiling override
//! and initial range for the inspector.
//!
//! ```text
//! vmspan [--fraction N] [--granule-shift S] [--limit BYTES|unlimited] [START SIZE]
//! ```
//!
//! Numbers are decimal or `0x`-prefixed hex; `_` separators are ignored.

use crate::errors::ConfigError;
use crate::memory::constants::{DEFAULT_MAX_VIRT_MEM_FRACTION, GRANULE_SIZE};
use crate::memory::{FixedMemoryLimit, MemoryRange};

/// Collector-wide tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tunables {
    max_virt_mem_fraction: usize,
    granule_size: usize,
}

impl Tunables {
    /// Create validated tunables
    pub fn new(max_virt_mem_fraction: usize, granule_size: usize) -> Result<Self, ConfigError> {
        if max_virt_mem_fraction == 0 {
            return Err(ConfigError::InvalidFraction {
                value: max_virt_mem_fraction,
            });
        }
        if !granule_size.is_power_of_two() {
            return Err(ConfigError::InvalidGranule {
                value: granule_size,
            });
        }
        Ok(Tunables {
            max_virt_mem_fraction,
            granule_size,
        })
    }

    /// Divisor applied to the address space ceiling (always >= 1)
    pub fn max_virt_mem_fraction(&self) -> usize {
        self.max_virt_mem_fraction
    }

    /// Alignment unit for heap reservations (always a power of two)
    pub fn granule_size(&self) -> usize {
        self.granule_size
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Tunables {
            max_virt_mem_fraction: DEFAULT_MAX_VIRT_MEM_FRACTION,
            granule_size: GRANULE_SIZE,
        }
    }
}

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub tunables: Tunables,
    /// Replaces the platform query when set
    pub limit_override: Option<FixedMemoryLimit>,
    /// Range to load into the inspector
    pub range: Option<MemoryRange>,
    pub show_help: bool,
}

impl CliOptions {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fraction = DEFAULT_MAX_VIRT_MEM_FRACTION;
        let mut granule = GRANULE_SIZE;
        let mut limit_override = None;
        let mut positional = Vec::new();
        let mut show_help = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => show_help = true,
                "--fraction" => {
                    let value = next_value(&mut args, arg)?;
                    fraction = parse_number(arg, &value)?;
                }
                "--granule-shift" => {
                    let value = next_value(&mut args, arg)?;
                    let shift: u32 = value.parse().map_err(|_| ConfigError::InvalidNumber {
                        flag: arg.to_string(),
                        value: value.clone(),
                    })?;
                    granule = 1usize
                        .checked_shl(shift)
                        .ok_or(ConfigError::InvalidGranuleShift { value: shift })?;
                }
                "--limit" => {
                    let value = next_value(&mut args, arg)?;
                    limit_override = Some(if value == "unlimited" {
                        FixedMemoryLimit(None)
                    } else {
                        FixedMemoryLimit(Some(parse_number(arg, &value)?))
                    });
                }
                _ if arg.starts_with('-') => {
                    return Err(ConfigError::UnknownArgument {
                        arg: arg.to_string(),
                    })
                }
                _ => positional.push(parse_number("range", arg)?),
            }
        }

        let range = match positional.as_slice() {
            [] => None,
            [start, size] => {
                let start = *start;
                let size = *size;
                if start.checked_add(size).is_none() {
                    return Err(ConfigError::InvalidRange {
                        message: format!("0x{:x} + 0x{:x} overflows", start, size),
                    });
                }
                Some(MemoryRange::new(start, size))
            }
            [_] => {
                return Err(ConfigError::InvalidRange {
                    message: "START given without SIZE".to_string(),
                })
            }
            _ => {
                return Err(ConfigError::InvalidRange {
                    message: format!("expected START SIZE, got {} values", positional.len()),
                })
            }
        };

        Ok(CliOptions {
            tunables: Tunables::new(fraction, granule)?,
            limit_override,
            range,
            show_help,
        })
    }
}

fn next_value<I, S>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|s| s.as_ref().to_string())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}

/// Parse a decimal or `0x` hex number
pub fn parse_number(flag: &str, value: &str) -> Result<usize, ConfigError> {
    let cleaned = value.replace('_', "");
    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => cleaned.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
