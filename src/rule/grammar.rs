//! Tiling rule grammar
//!
//! A rule has the form `seed/transform/.../transform[*]`:
//! - the seed is a `-` separated list of layers, each a `,` separated list
//!   of slots: `N` (regular N-gon), `N(deg)` or `N(a)` (star N-gon) or `0`
//!   (skip the next free edge)
//! - each transform is `m`, `r` or `t` followed by a fixed angle in degrees
//!   or a parenthesized landmark `(c|h|v<ordinal>)`
//! - a trailing `*` requests the dual tiling
//!
//! Parsing validates everything up front; no geometry is built from a rule
//! that failed to parse.

use crate::io::configuration::GenerationConfig;
use crate::io::error::{Result, RuleFailure, TilingError, invalid_rule, malformed};
use std::fmt;
use std::str::FromStr;

/// Concavity of a star slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarAngle {
    /// Point angle in degrees
    Fixed(u32),
    /// Use the configured adjustable parameter
    Adjustable,
}

impl StarAngle {
    /// Point angle in radians given the configured adjustable value in degrees
    pub fn radians(self, parameter_degrees: f64) -> f64 {
        match self {
            Self::Fixed(degrees) => f64::from(degrees).to_radians(),
            Self::Adjustable => parameter_degrees.to_radians(),
        }
    }
}

/// One slot of a seed layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeSlot {
    /// Skip the next free edge
    Empty,
    /// Regular polygon
    Regular {
        /// Number of sides
        sides: u32,
    },
    /// Star polygon
    Star {
        /// Number of points
        sides: u32,
        /// Concavity
        angle: StarAngle,
    },
}

impl ShapeSlot {
    /// Side count, or `None` for an empty slot
    pub const fn sides(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Regular { sides } | Self::Star { sides, .. } => Some(*sides),
        }
    }

    /// Whether this slot only skips an edge
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for ShapeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "0"),
            Self::Regular { sides } => write!(f, "{sides}"),
            Self::Star {
                sides,
                angle: StarAngle::Fixed(degrees),
            } => write!(f, "{sides}({degrees})"),
            Self::Star {
                sides,
                angle: StarAngle::Adjustable,
            } => write!(f, "{sides}(a)"),
        }
    }
}

/// Symmetry operation of a transform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Reflection
    Mirror,
    /// Rotation (a point reflection when anchored on a landmark)
    Rotate,
    /// Translation by a landmark vector
    Translate,
}

impl TransformKind {
    /// Grammar character
    pub const fn symbol(self) -> char {
        match self {
            Self::Mirror => 'm',
            Self::Rotate => 'r',
            Self::Translate => 't',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'm' => Some(Self::Mirror),
            'r' => Some(Self::Rotate),
            't' => Some(Self::Translate),
            _ => None,
        }
    }
}

/// Kind of geometric reference point a transform can anchor on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LandmarkKind {
    /// Polygon centroid
    Centroid,
    /// Edge midpoint
    Midpoint,
    /// Polygon vertex
    Vertex,
}

impl LandmarkKind {
    /// Grammar character
    pub const fn symbol(self) -> char {
        match self {
            Self::Centroid => 'c',
            Self::Midpoint => 'h',
            Self::Vertex => 'v',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(Self::Centroid),
            'h' => Some(Self::Midpoint),
            'v' => Some(Self::Vertex),
            _ => None,
        }
    }
}

/// What a transform is anchored on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Fixed angle in degrees about the origin
    Angle(u32),
    /// The `ordinal`-th (1-based) landmark of `kind` in clockwise order
    Landmark {
        /// Landmark kind
        kind: LandmarkKind,
        /// 1-based ordinal
        ordinal: usize,
    },
}

/// One symmetry step of a rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    /// Operation
    pub kind: TransformKind,
    /// Anchor
    pub anchor: Anchor,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            Anchor::Angle(degrees) => write!(f, "{}{degrees}", self.kind.symbol()),
            Anchor::Landmark { kind, ordinal } => {
                write!(f, "{}({}{ordinal})", self.kind.symbol(), kind.symbol())
            }
        }
    }
}

/// Parsed tiling rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilingRule {
    seed: Vec<Vec<ShapeSlot>>,
    transforms: Vec<Transform>,
    dual: bool,
}

impl TilingRule {
    /// Parse and validate a rule string
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidRule`] naming an unsupported side count,
    /// an unsupported angle or the malformed token
    pub fn parse(rule: &str, config: &GenerationConfig) -> Result<Self> {
        let trimmed = rule.trim();
        let (body, dual) = match trimmed.strip_suffix('*') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };

        let mut phases = body.split('/');
        let seed_text = phases.next().unwrap_or_default();
        if seed_text.is_empty() {
            return Err(malformed(rule, seed_text, &"seed is empty"));
        }

        let seed = seed_text
            .split('-')
            .map(|layer| {
                layer
                    .split(',')
                    .map(|slot| parse_slot(rule, slot, config))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        match seed.first().map(Vec::as_slice) {
            Some([core]) if !core.is_empty() => {}
            _ => {
                return Err(malformed(
                    rule,
                    seed_text.split('-').next().unwrap_or_default(),
                    &"core layer must be a single shape",
                ));
            }
        }

        let transforms = phases
            .map(|token| parse_transform(rule, token, config))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            seed,
            transforms,
            dual,
        })
    }

    /// Seed layers, layer 0 being the core polygon
    pub fn seed(&self) -> &[Vec<ShapeSlot>] {
        &self.seed
    }

    /// The single core slot
    pub fn core(&self) -> ShapeSlot {
        self.seed
            .first()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or(ShapeSlot::Empty)
    }

    /// Ordered symmetry transforms
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Whether the dual tiling was requested
    pub const fn is_dual(&self) -> bool {
        self.dual
    }

    /// Every distinct side count used by the seed, ascending
    pub fn side_counts(&self) -> Vec<u32> {
        let mut sides: Vec<u32> = self
            .seed
            .iter()
            .flatten()
            .filter_map(ShapeSlot::sides)
            .collect();
        sides.sort_unstable();
        sides.dedup();
        sides
    }
}

impl fmt::Display for TilingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seed = self
            .seed
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("-");
        write!(f, "{seed}")?;

        for transform in &self.transforms {
            write!(f, "/{transform}")?;
        }

        if self.dual {
            write!(f, "*")?;
        }
        Ok(())
    }
}

impl FromStr for TilingRule {
    type Err = TilingError;

    fn from_str(rule: &str) -> Result<Self> {
        Self::parse(rule, &GenerationConfig::default())
    }
}

fn parse_number<T>(rule: &str, token: &str, text: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed(rule, token, &format!("expected {what}")));
    }
    text.parse()
        .map_err(|error| malformed(rule, token, &format!("{what}: {error}")))
}

fn parse_slot(rule: &str, slot: &str, config: &GenerationConfig) -> Result<ShapeSlot> {
    let (count_text, star) = match slot.split_once('(') {
        Some((count, rest)) => {
            let inner = rest
                .strip_suffix(')')
                .ok_or_else(|| malformed(rule, slot, &"unclosed star angle"))?;
            (count, Some(inner))
        }
        None => (slot, None),
    };

    let sides: u32 = parse_number(rule, slot, count_text, "a side count")?;
    if sides == 0 && star.is_none() {
        return Ok(ShapeSlot::Empty);
    }
    if !config.possible_sides.contains(&sides) {
        return Err(invalid_rule(rule, RuleFailure::UnsupportedSide(sides)));
    }

    match star {
        None => Ok(ShapeSlot::Regular { sides }),
        Some("a") => Ok(ShapeSlot::Star {
            sides,
            angle: StarAngle::Adjustable,
        }),
        Some(degrees) => Ok(ShapeSlot::Star {
            sides,
            angle: StarAngle::Fixed(parse_number(rule, slot, degrees, "a star angle")?),
        }),
    }
}

fn parse_transform(rule: &str, token: &str, config: &GenerationConfig) -> Result<Transform> {
    let mut chars = token.chars();
    let kind = chars
        .next()
        .and_then(TransformKind::from_symbol)
        .ok_or_else(|| malformed(rule, token, &"transform must start with m, r or t"))?;
    let rest = chars.as_str();

    if let Some(inner) = rest.strip_prefix('(') {
        let inner = inner
            .strip_suffix(')')
            .ok_or_else(|| malformed(rule, token, &"unclosed landmark"))?;
        let mut inner_chars = inner.chars();
        let landmark = inner_chars
            .next()
            .and_then(LandmarkKind::from_symbol)
            .ok_or_else(|| malformed(rule, token, &"landmark must be c, h or v"))?;
        let ordinal: usize = parse_number(rule, token, inner_chars.as_str(), "a landmark ordinal")?;
        if ordinal == 0 {
            return Err(malformed(rule, token, &"landmark ordinals start at 1"));
        }

        return Ok(Transform {
            kind,
            anchor: Anchor::Landmark {
                kind: landmark,
                ordinal,
            },
        });
    }

    if kind == TransformKind::Translate {
        return Err(malformed(rule, token, &"translation needs a landmark"));
    }

    let degrees: u32 = parse_number(rule, token, rest, "an angle")?;
    if !config.possible_angles.contains(&degrees) {
        return Err(invalid_rule(rule, RuleFailure::UnsupportedAngle(degrees)));
    }

    Ok(Transform {
        kind,
        anchor: Anchor::Angle(degrees),
    })
}
