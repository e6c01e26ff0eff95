use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum BondKind {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
    Ionic,
    Hydrogen,
}

/// Immutable per-bond-kind reference data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondTypeSpec {
    pub kind: BondKind,
    /// Harmonic strength coefficient applied to the squared length deviation.
    pub strength: f64,
    /// Equilibrium length in Angstroms.
    pub length: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond kind string: '{0}'")]
pub struct ParseBondKindError(pub String);

impl BondKind {
    pub const COUNT: usize = 6;

    pub const ALL: [BondKind; Self::COUNT] = [
        BondKind::Single,
        BondKind::Double,
        BondKind::Triple,
        BondKind::Aromatic,
        BondKind::Ionic,
        BondKind::Hydrogen,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BondKind::Single => "single",
            BondKind::Double => "double",
            BondKind::Triple => "triple",
            BondKind::Aromatic => "aromatic",
            BondKind::Ionic => "ionic",
            BondKind::Hydrogen => "hydrogen",
        }
    }

    pub fn builtin_spec(self) -> BondTypeSpec {
        let (strength, length) = match self {
            BondKind::Single => (350.0, 1.54),
            BondKind::Double => (615.0, 1.34),
            BondKind::Triple => (835.0, 1.20),
            BondKind::Aromatic => (518.0, 1.40),
            BondKind::Ionic => (400.0, 2.36),
            BondKind::Hydrogen => (20.0, 1.80),
        };
        BondTypeSpec {
            kind: self,
            strength,
            length,
        }
    }
}

impl FromStr for BondKind {
    type Err = ParseBondKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "ar" | "aromatic" => Ok(Self::Aromatic),
            "ionic" => Ok(Self::Ionic),
            "hb" | "hydrogen" => Ok(Self::Hydrogen),
            _ => Err(ParseBondKindError(s.to_string())),
        }
    }
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BondKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
