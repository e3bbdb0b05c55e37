//! Amino acid physicochemical properties.
//!
//! Two views per residue:
//!
//! - [`AaProperties`]: a set of qualitative flags (hydrophobic, aromatic,
//!   ...), combinable with `|`
//! - [`PropertyDetails`]: numeric scales rescaled linearly onto
//!   `[-1.0, 1.0]` so residues can be compared across properties
//!
//! Lookups are case-insensitive. Anything outside the 20 standard residues
//! has no flags and no details.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Index of a standard residue in `ACDEFGHIKLMNPQRSTVWY` order.
pub(crate) const fn aa_index(aa: u8) -> Option<usize> {
    match aa.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// Set of qualitative residue properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AaProperties(u16);

impl AaProperties {
    pub const NONE: Self = Self(0);
    pub const ACIDIC: Self = Self(0x0001);
    pub const ALIPHATIC: Self = Self(0x0002);
    pub const AROMATIC: Self = Self(0x0004);
    pub const BASIC_POSITIVE: Self = Self(0x0008);
    pub const HYDROPHILIC: Self = Self(0x0010);
    pub const HYDROPHOBIC: Self = Self(0x0020);
    pub const HYDROXYLIC: Self = Self(0x0040);
    pub const NEGATIVE: Self = Self(0x0080);
    pub const POLAR: Self = Self(0x0100);
    pub const SMALL: Self = Self(0x0200);
    pub const SULPHUR: Self = Self(0x0400);
    pub const TINY: Self = Self(0x0800);

    const NAMES: [(Self, &'static str); 12] = [
        (Self::ACIDIC, "acidic"),
        (Self::ALIPHATIC, "aliphatic"),
        (Self::AROMATIC, "aromatic"),
        (Self::BASIC_POSITIVE, "basic_positive"),
        (Self::HYDROPHILIC, "hydrophilic"),
        (Self::HYDROPHOBIC, "hydrophobic"),
        (Self::HYDROXYLIC, "hydroxylic"),
        (Self::NEGATIVE, "negative"),
        (Self::POLAR, "polar"),
        (Self::SMALL, "small"),
        (Self::SULPHUR, "sulphur"),
        (Self::TINY, "tiny"),
    ];

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Names of the flags present, in alphabetical order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for AaProperties {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for AaProperties {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for AaProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        for (index, name) in self.names().enumerate() {
            if index > 0 {
                write!(f, "|")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}

const fn flags(list: &[AaProperties]) -> AaProperties {
    let mut result = AaProperties::NONE;
    let mut i = 0;
    while i < list.len() {
        result = result.union(list[i]);
        i += 1;
    }
    result
}

use AaProperties as P;

const PROPERTY_TABLE: [AaProperties; 20] = [
    flags(&[P::HYDROPHOBIC, P::SMALL, P::TINY]),                       // A
    flags(&[P::HYDROPHOBIC, P::SMALL, P::TINY, P::SULPHUR]),           // C
    flags(&[P::HYDROPHILIC, P::SMALL, P::POLAR, P::NEGATIVE, P::ACIDIC]), // D
    flags(&[P::HYDROPHILIC, P::POLAR, P::NEGATIVE, P::ACIDIC]),        // E
    flags(&[P::HYDROPHOBIC, P::AROMATIC]),                             // F
    flags(&[P::HYDROPHILIC, P::SMALL, P::TINY]),                       // G
    flags(&[P::HYDROPHOBIC, P::AROMATIC, P::POLAR, P::BASIC_POSITIVE]), // H
    flags(&[P::ALIPHATIC, P::HYDROPHOBIC]),                            // I
    flags(&[P::HYDROPHOBIC, P::BASIC_POSITIVE, P::POLAR]),             // K
    flags(&[P::ALIPHATIC, P::HYDROPHOBIC]),                            // L
    flags(&[P::HYDROPHOBIC, P::SULPHUR]),                              // M
    flags(&[P::HYDROPHILIC, P::SMALL, P::POLAR, P::ACIDIC]),           // N
    flags(&[P::HYDROPHILIC, P::SMALL]),                                // P
    flags(&[P::HYDROPHILIC, P::POLAR, P::ACIDIC]),                     // Q
    flags(&[P::HYDROPHILIC, P::POLAR, P::BASIC_POSITIVE]),             // R
    flags(&[P::HYDROPHILIC, P::SMALL, P::POLAR, P::HYDROXYLIC]),       // S
    flags(&[P::HYDROPHOBIC, P::SMALL, P::HYDROXYLIC]),                 // T
    flags(&[P::ALIPHATIC, P::HYDROPHOBIC, P::SMALL]),                  // V
    flags(&[P::HYDROPHOBIC, P::AROMATIC, P::POLAR]),                   // W
    flags(&[P::HYDROPHOBIC, P::AROMATIC, P::POLAR]),                   // Y
];

/// Kyte-Doolittle (1982) hydropathy.
const HYDROPATHY: [f64; 20] = [
    1.8, 2.5, -3.5, -3.5, 2.8, -0.4, -3.2, 4.5, -3.9, 3.8, //
    1.9, -3.5, -1.6, -3.5, -4.5, -0.8, -0.7, 4.2, -0.9, -1.3,
];

/// Zamyatnin (1972) residue volume, cubic angstroms.
const VOLUME: [f64; 20] = [
    88.6, 108.5, 111.1, 138.4, 189.9, 60.1, 153.2, 166.7, 168.6, 166.7, //
    162.9, 114.1, 112.7, 143.8, 173.4, 89.0, 116.1, 140.0, 227.8, 193.6,
];

/// Grantham (1974) polarity.
const POLARITY: [f64; 20] = [
    8.1, 5.5, 13.0, 12.3, 5.2, 9.0, 10.4, 5.2, 11.3, 4.9, //
    5.7, 11.6, 8.0, 10.5, 10.5, 9.2, 8.6, 5.9, 5.4, 6.2,
];

/// Isoelectric point of the free amino acid.
const ISOELECTRIC_POINT: [f64; 20] = [
    6.00, 5.07, 2.77, 3.22, 5.48, 5.97, 7.59, 6.02, 9.74, 5.98, //
    5.74, 5.41, 6.30, 5.65, 10.76, 5.68, 5.60, 5.96, 5.89, 5.66,
];

/// Numeric properties of one residue, each scaled to `[-1.0, 1.0]` over the
/// 20 standard residues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDetails {
    pub hydropathy: f64,
    pub volume: f64,
    pub polarity: f64,
    pub isoelectric_point: f64,
}

fn scale(table: &[f64; 20], index: usize) -> f64 {
    let (min, max) = table
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &value| {
            (min.min(value), max.max(value))
        });
    2.0 * (table[index] - min) / (max - min) - 1.0
}

/// Qualitative properties of `aa`; [`AaProperties::NONE`] when unknown.
///
/// # Examples
///
/// ```rust
/// use dark_core::properties::{properties, AaProperties};
///
/// let cysteine = properties(b'C');
/// assert!(cysteine.contains(AaProperties::SULPHUR | AaProperties::TINY));
/// assert!(properties(b'*').is_empty());
/// ```
pub fn properties(aa: u8) -> AaProperties {
    aa_index(aa).map_or(AaProperties::NONE, |index| PROPERTY_TABLE[index])
}

/// Scaled numeric properties of `aa`; `None` when unknown.
pub fn property_details(aa: u8) -> Option<PropertyDetails> {
    aa_index(aa).map(|index| PropertyDetails {
        hydropathy: scale(&HYDROPATHY, index),
        volume: scale(&VOLUME, index),
        polarity: scale(&POLARITY, index),
        isoelectric_point: scale(&ISOELECTRIC_POINT, index),
    })
}
