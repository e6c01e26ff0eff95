use super::bond_kind::{BondKind, BondTypeSpec};
use super::element::{Element, ElementSpec};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
    #[error("Unknown element entry: '{0}'")]
    UnknownElement(String),
    #[error("Unknown bond kind entry: '{0}'")]
    UnknownBondKind(String),
    #[error("Duplicate catalog entry for {0}")]
    DuplicateEntry(String),
    #[error("Missing catalog entry for element {0}")]
    MissingElement(Element),
    #[error("Missing catalog entry for bond kind {0}")]
    MissingBondKind(BondKind),
    #[error("Invalid value for {entry}.{field}: {value}")]
    InvalidValue {
        entry: String,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    elements: BTreeMap<String, RawElement>,
    #[serde(default)]
    bonds: BTreeMap<String, RawBond>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElement {
    color: String,
    radius: f64,
    mass: f64,
    electronegativity: f64,
    valence: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBond {
    strength: f64,
    length: f64,
}

/// Read-only reference tables for elements and bond kinds.
///
/// A `Catalog` always holds exactly one entry per [`Element`] and per [`BondKind`];
/// both the built-in table and any table loaded from TOML are checked for
/// completeness when they are constructed, so lookups never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    elements: Vec<ElementSpec>,
    bonds: Vec<BondTypeSpec>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            elements: Element::ALL.iter().map(|e| e.builtin_spec()).collect(),
            bonds: BondKind::ALL.iter().map(|k| k.builtin_spec()).collect(),
        }
    }

    /// Loads a complete catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, and any of the
    /// validation errors described in [`Catalog::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a complete catalog from TOML text.
    ///
    /// The document holds `[elements.<symbol>]` and `[bonds.<kind>]` tables.
    /// Keys are parsed with the same rules as [`Element::from_str`](std::str::FromStr)
    /// and [`BondKind::from_str`](std::str::FromStr), so `C` and `carbon` name the
    /// same entry and may not both appear.
    ///
    /// # Errors
    ///
    /// Fails on unknown or duplicate keys, on any missing element or bond kind,
    /// and on non-finite or non-positive physical values.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;

        let mut element_slots: Vec<Option<ElementSpec>> = vec![None; Element::COUNT];
        for (key, entry) in raw.elements {
            let element: Element = key
                .parse()
                .map_err(|_| CatalogError::UnknownElement(key.clone()))?;
            let spec = ElementSpec {
                element,
                color: entry.color,
                radius: entry.radius,
                mass: entry.mass,
                electronegativity: entry.electronegativity,
                valence: entry.valence,
            };
            validate_element(&spec)?;
            let slot = &mut element_slots[element.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateEntry(format!("element {}", element)));
            }
            *slot = Some(spec);
        }

        let mut bond_slots: Vec<Option<BondTypeSpec>> = vec![None; BondKind::COUNT];
        for (key, entry) in raw.bonds {
            let kind: BondKind = key
                .parse()
                .map_err(|_| CatalogError::UnknownBondKind(key.clone()))?;
            let spec = BondTypeSpec {
                kind,
                strength: entry.strength,
                length: entry.length,
            };
            validate_bond(&spec)?;
            let slot = &mut bond_slots[kind.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateEntry(format!("bond kind {}", kind)));
            }
            *slot = Some(spec);
        }

        let mut elements = Vec::with_capacity(Element::COUNT);
        for element in Element::ALL {
            let spec = element_slots[element.index()]
                .take()
                .ok_or(CatalogError::MissingElement(element))?;
            elements.push(spec);
        }

        let mut bonds = Vec::with_capacity(BondKind::COUNT);
        for kind in BondKind::ALL {
            let spec = bond_slots[kind.index()]
                .take()
                .ok_or(CatalogError::MissingBondKind(kind))?;
            bonds.push(spec);
        }

        Ok(Self { elements, bonds })
    }

    #[inline]
    pub fn element(&self, element: Element) -> &ElementSpec {
        &self.elements[element.index()]
    }

    #[inline]
    pub fn bond_type(&self, kind: BondKind) -> &BondTypeSpec {
        &self.bonds[kind.index()]
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementSpec> {
        self.elements.iter()
    }

    pub fn bond_types(&self) -> impl Iterator<Item = &BondTypeSpec> {
        self.bonds.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_element(spec: &ElementSpec) -> Result<(), CatalogError> {
    let entry = || format!("elements.{}", spec.element);
    let invalid = |field: &'static str, value: String| CatalogError::InvalidValue {
        entry: entry(),
        field,
        value,
    };

    if !is_hex_color(&spec.color) {
        return Err(invalid("color", spec.color.clone()));
    }
    if !(spec.radius.is_finite() && spec.radius > 0.0) {
        return Err(invalid("radius", spec.radius.to_string()));
    }
    if !(spec.mass.is_finite() && spec.mass > 0.0) {
        return Err(invalid("mass", spec.mass.to_string()));
    }
    if !(spec.electronegativity.is_finite() && spec.electronegativity >= 0.0) {
        return Err(invalid(
            "electronegativity",
            spec.electronegativity.to_string(),
        ));
    }
    Ok(())
}

fn validate_bond(spec: &BondTypeSpec) -> Result<(), CatalogError> {
    let invalid = |field: &'static str, value: f64| CatalogError::InvalidValue {
        entry: format!("bonds.{}", spec.kind),
        field,
        value: value.to_string(),
    };

    if !(spec.strength.is_finite() && spec.strength > 0.0) {
        return Err(invalid("strength", spec.strength));
    }
    if !(spec.length.is_finite() && spec.length > 0.0) {
        return Err(invalid("length", spec.length));
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
