use phf::{Map, phf_map};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of elements the sandbox can place.
///
/// Every variant has a built-in [`ElementSpec`] returned by [`Element::builtin_spec`];
/// because that lookup is an exhaustive `match`, adding a variant without data
/// fails to compile rather than failing at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Element {
    Hydrogen,
    #[default]
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Sodium,
    Phosphorus,
    Sulfur,
    Chlorine,
}

/// Immutable per-element reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    /// The element this entry describes.
    pub element: Element,
    /// Display color as `#RRGGBB`.
    pub color: String,
    /// Display radius in Angstroms, also used as the picking radius.
    pub radius: f64,
    /// Atomic mass in g/mol.
    pub mass: f64,
    /// Pauling electronegativity.
    pub electronegativity: f64,
    /// Typical number of bonds the element forms.
    pub valence: u8,
}

impl ElementSpec {
    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    pub fn name(&self) -> &'static str {
        self.element.name()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown element symbol or name: '{0}'")]
pub struct ParseElementError(pub String);

static ELEMENT_ALIASES: Map<&'static str, Element> = phf_map! {
    "h" => Element::Hydrogen,
    "hydrogen" => Element::Hydrogen,
    "c" => Element::Carbon,
    "carbon" => Element::Carbon,
    "n" => Element::Nitrogen,
    "nitrogen" => Element::Nitrogen,
    "o" => Element::Oxygen,
    "oxygen" => Element::Oxygen,
    "f" => Element::Fluorine,
    "fluorine" => Element::Fluorine,
    "na" => Element::Sodium,
    "sodium" => Element::Sodium,
    "p" => Element::Phosphorus,
    "phosphorus" => Element::Phosphorus,
    "s" => Element::Sulfur,
    "sulfur" => Element::Sulfur,
    "sulphur" => Element::Sulfur,
    "cl" => Element::Chlorine,
    "chlorine" => Element::Chlorine,
};

impl Element {
    pub const COUNT: usize = 9;

    pub const ALL: [Element; Self::COUNT] = [
        Element::Hydrogen,
        Element::Carbon,
        Element::Nitrogen,
        Element::Oxygen,
        Element::Fluorine,
        Element::Sodium,
        Element::Phosphorus,
        Element::Sulfur,
        Element::Chlorine,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Fluorine => "F",
            Element::Sodium => "Na",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Chlorine => "Cl",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Hydrogen => "Hydrogen",
            Element::Carbon => "Carbon",
            Element::Nitrogen => "Nitrogen",
            Element::Oxygen => "Oxygen",
            Element::Fluorine => "Fluorine",
            Element::Sodium => "Sodium",
            Element::Phosphorus => "Phosphorus",
            Element::Sulfur => "Sulfur",
            Element::Chlorine => "Chlorine",
        }
    }

    /// Returns the built-in reference entry for this element.
    ///
    /// Colors follow the CPK/Jmol convention; radii are covalent radii.
    pub fn builtin_spec(self) -> ElementSpec {
        let (color, radius, mass, electronegativity, valence) = match self {
            Element::Hydrogen => ("#FFFFFF", 0.31, 1.008, 2.20, 1),
            Element::Carbon => ("#909090", 0.76, 12.011, 2.55, 4),
            Element::Nitrogen => ("#3050F8", 0.71, 14.007, 3.04, 3),
            Element::Oxygen => ("#FF0D0D", 0.66, 15.999, 3.44, 2),
            Element::Fluorine => ("#90E050", 0.57, 18.998, 3.98, 1),
            Element::Sodium => ("#AB5CF2", 1.66, 22.990, 0.93, 1),
            Element::Phosphorus => ("#FF8000", 1.07, 30.974, 2.19, 5),
            Element::Sulfur => ("#FFFF30", 1.05, 32.06, 2.58, 2),
            Element::Chlorine => ("#1FF01F", 1.02, 35.45, 3.16, 1),
        };
        ElementSpec {
            element: self,
            color: color.to_string(),
            radius,
            mass,
            electronegativity,
            valence,
        }
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses an element symbol or English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ELEMENT_ALIASES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_variant_in_index_order() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn builtin_spec_matches_requested_element() {
        for element in Element::ALL {
            let spec = element.builtin_spec();
            assert_eq!(spec.element, element);
            assert!(spec.mass > 0.0);
            assert!(spec.radius > 0.0);
            assert_eq!(spec.symbol(), element.symbol());
        }
    }

    #[test]
    fn from_str_parses_symbols_and_names_case_insensitively() {
        assert_eq!("C".parse::<Element>(), Ok(Element::Carbon));
        assert_eq!("carbon".parse::<Element>(), Ok(Element::Carbon));
        assert_eq!("NA".parse::<Element>(), Ok(Element::Sodium));
        assert_eq!("Cl".parse::<Element>(), Ok(Element::Chlorine));
        assert_eq!(" o ".parse::<Element>(), Ok(Element::Oxygen));
        assert_eq!("Sulphur".parse::<Element>(), Ok(Element::Sulfur));
    }

    #[test]
    fn from_str_rejects_unknown_symbols() {
        assert_eq!(
            "Xx".parse::<Element>(),
            Err(ParseElementError("Xx".to_string()))
        );
        assert!("".parse::<Element>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for element in Element::ALL {
            assert_eq!(element.to_string().parse::<Element>(), Ok(element));
        }
    }

    #[test]
    fn default_element_is_carbon() {
        assert_eq!(Element::default(), Element::Carbon);
    }
}
