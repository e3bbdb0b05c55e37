//! Alphabets, markers and fixed tables shared across the crate.

// =============================================================================
// Alphabets
// =============================================================================

/// Valid DNA bases.
pub const DNA_ALPHABET: &[u8] = b"ACGT";

/// Valid RNA bases. `T` is accepted alongside `U`.
pub const RNA_ALPHABET: &[u8] = b"ACGTU";

/// The twenty standard amino acid letters, in alphabetical order.
pub const AA_ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Standard amino acid letters plus the unknown residue `X`.
pub const AA_ALPHABET_WITH_X: &[u8] = b"ACDEFGHIKLMNPQRSTVWXY";

/// Number of leading residues examined by a default alphabet check.
pub const DEFAULT_ALPHABET_CHECK_COUNT: usize = 10;

/// AA reads longer than this whose letters all fall within `ACGT` are
/// assumed to be DNA passed by mistake.
pub const DNA_LOOKALIKE_MIN_LENGTH: usize = 10;

// =============================================================================
// Complement pairs (IUPAC, uppercase)
// =============================================================================

/// Base pairings used to build the DNA complement table.
pub const DNA_COMPLEMENT_PAIRS: &[(u8, u8)] = &[
    (b'A', b'T'),
    (b'C', b'G'),
    (b'G', b'C'),
    (b'T', b'A'),
    (b'M', b'K'),
    (b'R', b'Y'),
    (b'W', b'W'),
    (b'S', b'S'),
    (b'Y', b'R'),
    (b'K', b'M'),
    (b'V', b'B'),
    (b'H', b'D'),
    (b'D', b'H'),
    (b'B', b'V'),
    (b'X', b'X'),
    (b'N', b'N'),
];

/// Base pairings used to build the RNA complement table.
pub const RNA_COMPLEMENT_PAIRS: &[(u8, u8)] = &[
    (b'A', b'U'),
    (b'C', b'G'),
    (b'G', b'C'),
    (b'U', b'A'),
    (b'M', b'K'),
    (b'R', b'Y'),
    (b'W', b'W'),
    (b'S', b'S'),
    (b'Y', b'R'),
    (b'K', b'M'),
    (b'V', b'B'),
    (b'H', b'D'),
    (b'D', b'H'),
    (b'B', b'V'),
    (b'X', b'X'),
    (b'N', b'N'),
];

// =============================================================================
// Translation
// =============================================================================

/// Length of a codon in bases
pub const CODON_LENGTH: usize = 3;

/// Number of reading frames per strand
pub const READING_FRAMES: usize = 3;

/// Base used to pad a trailing partial codon
pub const PADDING_BASE: u8 = b'N';

/// Amino acid letter produced by a start codon
pub const START_RESIDUE: u8 = b'M';

/// Symbol produced by a stop codon
pub const STOP_RESIDUE: u8 = b'*';

/// Residue emitted when an ambiguous codon cannot be narrowed down
pub const UNKNOWN_RESIDUE: u8 = b'X';

/// Standard genetic code (NCBI table 1), codons ordered TCAG x TCAG x TCAG.
pub const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

// =============================================================================
// Collections
// =============================================================================

/// Gap symbol removed by the `remove_gaps` filter stage
pub const GAP_SYMBOL: u8 = b'-';
