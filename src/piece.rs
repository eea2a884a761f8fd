//! Chess piece kinds and variant colors.

use crate::constants::SVG_EXTENSION;
use crate::error::Error;
use serde::Serialize;

/// One of the six chess piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Pawn (`P`).
    Pawn,
    /// Knight (`N`).
    Knight,
    /// Bishop (`B`).
    Bishop,
    /// Rook (`R`).
    Rook,
    /// Queen (`Q`).
    Queen,
    /// King (`K`).
    King,
}

impl PieceKind {
    /// All kinds in processing order.
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Lowercase name, also the source file stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// One-letter code used in output file names.
    pub const fn code(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Source file name, e.g. `pawn.svg`.
    pub fn source_file_name(self) -> String {
        format!("{}.{SVG_EXTENSION}", self.name())
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PieceKind {
    type Err = Error;

    /// Accepts either the name or the one-letter code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(needle)
                    || (needle.len() == 1
                        && needle
                            .chars()
                            .next()
                            .is_some_and(|c| c.eq_ignore_ascii_case(&kind.code())))
            })
            .ok_or_else(|| Error::UnknownPiece {
                value: s.to_string(),
            })
    }
}

/// Variant color of an output icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    /// Black piece, prefix `b`.
    Black,
    /// White piece, prefix `w`.
    White,
}

impl PieceColor {
    /// Both colors in write order.
    pub const ALL: [Self; 2] = [Self::Black, Self::White];

    /// File name prefix.
    pub const fn prefix(self) -> char {
        match self {
            Self::Black => 'b',
            Self::White => 'w',
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}

/// Output file name for a kind and color, e.g. `wK.svg`.
pub fn output_file_name(kind: PieceKind, color: PieceColor) -> String {
    format!("{}{}.{SVG_EXTENSION}", color.prefix(), kind.code())
}
