use crate::error::Error;
use crate::Result;
use toml::Value;

pub const DEFAULT_LENGTH: usize = 8;
pub const DEFAULT_MEMORIZABLE: bool = true;

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 65_536;

/// Validated generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub length: usize,
    pub memorizable: bool,
    /// Permutation diagnostics level; 0 prints nothing.
    pub verbosity: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            memorizable: DEFAULT_MEMORIZABLE,
            verbosity: 0,
        }
    }
}

impl Options {
    pub fn new(length: usize, memorizable: bool) -> Self {
        Self {
            length,
            memorizable,
            verbosity: 0,
        }
    }

    pub fn with_verbosity(self, verbosity: u8) -> Self {
        Self { verbosity, ..self }
    }

    /// Check the invariants and hand back an equal copy.
    pub fn validate(&self) -> Result<Options> {
        if self.length == 0 {
            return Err(Error::LengthNotPositive(0));
        }
        if self.length > MAX_LENGTH {
            return Err(Error::LengthTooLarge(self.length as u64));
        }
        Ok(*self)
    }
}

/// Options as supplied by a caller, before defaults are merged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialOptions {
    pub length: Option<i64>,
    pub memorizable: Option<bool>,
    pub verbosity: Option<u8>,
}

impl PartialOptions {
    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(self, overrides: PartialOptions) -> PartialOptions {
        PartialOptions {
            length: overrides.length.or(self.length),
            memorizable: overrides.memorizable.or(self.memorizable),
            verbosity: overrides.verbosity.or(self.verbosity),
        }
    }

    /// Fill in the defaults and validate.
    pub fn validate(&self) -> Result<Options> {
        let defaults = Options::default();
        let memorizable = self.memorizable.unwrap_or(defaults.memorizable);
        let verbosity = self.verbosity.unwrap_or(defaults.verbosity);
        let length = match self.length {
            None => defaults.length,
            Some(n) if n <= 0 => return Err(Error::LengthNotPositive(n)),
            Some(n) => usize::try_from(n).map_err(|_| Error::LengthTooLarge(n as u64))?,
        };

        Options {
            length,
            memorizable,
            verbosity,
        }
        .validate()
    }
}

impl From<Options> for PartialOptions {
    fn from(options: Options) -> Self {
        Self {
            length: i64::try_from(options.length).ok(),
            memorizable: Some(options.memorizable),
            verbosity: Some(options.verbosity),
        }
    }
}

/// Reads `length`, `memorizable` and `permutations` (the verbosity) from a
/// table. Other keys are ignored.
impl TryFrom<&Value> for PartialOptions {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let table = value
            .as_table()
            .ok_or_else(|| Error::NotATable(value.to_string()))?;

        let memorizable = match table.get("memorizable") {
            None => None,
            Some(Value::Boolean(b)) => Some(*b),
            Some(other) => return Err(Error::MemorizableNotBoolean(other.to_string())),
        };

        let length = match table.get("length") {
            None => None,
            Some(Value::Integer(n)) => Some(*n),
            Some(other) => return Err(Error::LengthNotInteger(other.to_string())),
        };

        let verbosity = match table.get("permutations") {
            None => None,
            Some(Value::Integer(n)) => Some(
                u8::try_from(*n).map_err(|_| Error::VerbosityOutOfRange(n.to_string()))?,
            ),
            Some(other) => return Err(Error::VerbosityOutOfRange(other.to_string())),
        };

        Ok(PartialOptions {
            length,
            memorizable,
            verbosity,
        })
    }
}
