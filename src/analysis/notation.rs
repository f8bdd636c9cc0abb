//! Cundy-Rollett vertex notation
//!
//! Grammar: `piece(;piece)*`, where a piece is `term(.term)*` and a term is
//! `N` or `N^E`. A piece may be wrapped as `(…)^E`: when the wrapped
//! sequence already closes a full turn the exponent counts repeated vertex
//! types, otherwise it repeats the sequence around the vertex
//! (`(3.6)^2` is `3.6.3.6`). The whole notation may be wrapped as `[…]_k`
//! to tell apart tilings that share the same vertex types.

use crate::geometry::ordering::interior_angle;
use crate::io::configuration::{MAX_VERTEX_DEGREE, VERTEX_ANGLE_TOLERANCE};
use crate::io::error::{Result, TilingError};
use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// One vertex type and how many distinct vertices share it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexType {
    /// Cyclic sequence of side counts around the vertex
    pub shapes: Vec<u32>,
    /// Number of distinct vertex orbits of this type
    pub multiplicity: usize,
}

/// Parsed or extracted Cundy-Rollett notation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notation {
    vertex_types: Vec<VertexType>,
    variant: Option<u32>,
}

impl Notation {
    /// Notation listing `sequences` once each, ordered shortest first then
    /// numerically
    pub fn from_sequences<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Vec<u32>>,
    {
        let mut shapes: Vec<Vec<u32>> = sequences.into_iter().collect();
        shapes.sort_by(|a, b| compare_sequences(a, b));
        Self {
            vertex_types: shapes
                .into_iter()
                .map(|shapes| VertexType {
                    shapes,
                    multiplicity: 1,
                })
                .collect(),
            variant: None,
        }
    }

    /// Parse a notation string
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidNotation`] for empty input, unbalanced
    /// brackets, non-numeric terms, side counts below 3, or exponents and
    /// sequences that put more than [`MAX_VERTEX_DEGREE`] polygons around
    /// one vertex
    pub fn parse(notation: &str) -> Result<Self> {
        let fail = |reason: &str| TilingError::InvalidNotation {
            notation: notation.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = notation.trim();
        if trimmed.is_empty() {
            return Err(fail("notation is empty"));
        }

        let (body, variant) = match trimmed.rsplit_once('_') {
            Some((body, suffix)) => {
                let variant = suffix
                    .parse::<u32>()
                    .map_err(|error| fail(&format!("variant suffix: {error}")))?;
                (body, Some(variant))
            }
            None => (trimmed, None),
        };

        let body = match (body.strip_prefix('['), body.ends_with(']')) {
            (Some(inner), true) => inner.strip_suffix(']').unwrap_or(inner),
            (None, false) => body,
            _ => return Err(fail("unbalanced square brackets")),
        };

        let vertex_types = body
            .split(';')
            .map(|piece| parse_piece(piece.trim()).map_err(|reason| fail(&reason)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vertex_types,
            variant,
        })
    }

    /// Vertex types in notation order
    pub fn vertex_types(&self) -> &[VertexType] {
        &self.vertex_types
    }

    /// Variant suffix, if any
    pub const fn variant(&self) -> Option<u32> {
        self.variant
    }

    /// Total number of vertex orbits (the `k` of a k-uniform tiling)
    pub fn uniformity(&self) -> usize {
        self.vertex_types.iter().map(|vertex| vertex.multiplicity).sum()
    }

    /// Whether no vertex type is listed
    pub fn is_empty(&self) -> bool {
        self.vertex_types.is_empty()
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .vertex_types
            .iter()
            .map(|vertex| {
                let compressed = compress(&vertex.shapes);
                if vertex.multiplicity > 1 {
                    format!("({compressed})^{}", vertex.multiplicity)
                } else {
                    compressed
                }
            })
            .collect::<Vec<_>>()
            .join(";");

        match self.variant {
            Some(variant) => write!(f, "[{body}]_{variant}"),
            None => write!(f, "{body}"),
        }
    }
}

impl FromStr for Notation {
    type Err = TilingError;

    fn from_str(notation: &str) -> Result<Self> {
        Self::parse(notation)
    }
}

/// Join side counts with `.`, folding consecutive repeats into `N^E`
pub fn compress(shapes: &[u32]) -> String {
    shapes
        .chunk_by(|a, b| a == b)
        .map(|run| match run {
            [single] => single.to_string(),
            [first, ..] => format!("{first}^{}", run.len()),
            [] => String::new(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Order sequences by length, then element by element
pub fn compare_sequences(a: &[u32], b: &[u32]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Sum of the regular interior angles of `shapes`
pub fn angle_sum(shapes: &[u32]) -> f64 {
    shapes.iter().map(|&sides| interior_angle(sides)).sum()
}

/// Whether the polygons of `shapes` close a full turn around a vertex
pub fn closes_turn(shapes: &[u32]) -> bool {
    (angle_sum(shapes) - TAU).abs() <= VERTEX_ANGLE_TOLERANCE
}

fn parse_piece(piece: &str) -> std::result::Result<VertexType, String> {
    let Some(grouped) = piece.strip_prefix('(') else {
        return Ok(VertexType {
            shapes: parse_sequence(piece)?,
            multiplicity: 1,
        });
    };

    let (inner, exponent) = match grouped.rsplit_once(")^") {
        Some((inner, exponent)) => (inner, parse_count(exponent, "group exponent")?),
        None => (
            grouped
                .strip_suffix(')')
                .ok_or_else(|| format!("unclosed group in '{piece}'"))?,
            1,
        ),
    };

    let shapes = parse_sequence(inner)?;
    if closes_turn(&shapes) {
        return Ok(VertexType {
            shapes,
            multiplicity: exponent,
        });
    }

    check_degree(shapes.len().saturating_mul(exponent), piece)?;
    Ok(VertexType {
        shapes: shapes.repeat(exponent),
        multiplicity: 1,
    })
}

fn parse_sequence(sequence: &str) -> std::result::Result<Vec<u32>, String> {
    let mut shapes = Vec::new();
    for term in sequence.split('.') {
        let (base, exponent) = match term.split_once('^') {
            Some((base, exponent)) => (base, parse_count(exponent, "exponent")?),
            None => (term, 1),
        };
        let sides: u32 = base
            .trim()
            .parse()
            .map_err(|error| format!("'{term}' is not a side count: {error}"))?;
        if sides < 3 {
            return Err(format!("'{term}' has fewer than 3 sides"));
        }
        check_degree(shapes.len().saturating_add(exponent), sequence)?;
        shapes.extend(std::iter::repeat_n(sides, exponent));
    }
    Ok(shapes)
}

fn parse_count(text: &str, what: &str) -> std::result::Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(count) if (1..=MAX_VERTEX_DEGREE).contains(&count) => Ok(count),
        _ => Err(format!(
            "{what} '{text}' must be an integer from 1 to {MAX_VERTEX_DEGREE}"
        )),
    }
}

fn check_degree(length: usize, text: &str) -> std::result::Result<(), String> {
    if length > MAX_VERTEX_DEGREE {
        return Err(format!(
            "'{text}' puts {length} polygons around one vertex, at most {MAX_VERTEX_DEGREE} fit"
        ));
    }
    Ok(())
}
