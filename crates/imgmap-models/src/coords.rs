//! Coordinate lists: flat alternating x,y pixel sequences.
//!
//! The text form is a single string of comma-separated non-negative
//! integers with no whitespace, e.g. `"1188,557,1183,634"`. Parsing is
//! strict: a trailing comma, embedded whitespace, a sign or any other
//! non-digit character is rejected rather than guessed at.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bbox::{BoundingBox, Point};
use crate::error::{InvalidInputError, ModelResult};

/// Pattern describing the comma-separated text encoding.
pub const COORDINATE_PATTERN: &str = r"^[0-9]+(,[0-9]+)*$";

/// Validated polygon outline: non-empty and of even length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoordinateList(Vec<u32>);

impl CoordinateList {
    /// Wrap raw values, rejecting empty and odd-length sequences.
    pub fn new(values: Vec<u32>) -> ModelResult<Self> {
        validate_values(&values)?;
        Ok(Self(values))
    }

    /// Raw values in their original order.
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// X values (even positions), in order.
    pub fn xs(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().step_by(2).copied()
    }

    /// Y values (odd positions), in order.
    pub fn ys(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().skip(1).step_by(2).copied()
    }

    /// The outline as points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1]))
    }

    /// Number of (x, y) points in the outline.
    pub fn len_points(&self) -> usize {
        self.0.len() / 2
    }

    /// Bounding box of every point in the outline.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.points())
            .expect("coordinate lists hold at least one point")
    }

    pub fn into_values(self) -> Vec<u32> {
        self.0
    }
}

/// Check that a raw sequence can form a coordinate list.
pub fn validate_values(values: &[u32]) -> ModelResult<()> {
    if values.is_empty() {
        return Err(InvalidInputError::EmptyCoordinates);
    }
    if values.len() % 2 != 0 {
        return Err(InvalidInputError::OddCoordinateCount(values.len()));
    }
    Ok(())
}

/// Parse the comma-separated text encoding into raw values.
///
/// Only checks tokens; use [`CoordinateList::from_str`] to also check
/// the pairing.
///
/// # Examples
/// ```
/// use imgmap_models::coords::parse_values;
/// assert_eq!(parse_values("0,0,10,20").unwrap(), vec![0, 0, 10, 20]);
/// assert!(parse_values("0, 0").is_err());
/// ```
pub fn parse_values(s: &str) -> ModelResult<Vec<u32>> {
    if s.is_empty() {
        return Err(InvalidInputError::EmptyCoordinates);
    }

    s.split(',')
        .enumerate()
        .map(|(position, token)| parse_token(position, token))
        .collect()
}

fn parse_token(position: usize, token: &str) -> ModelResult<u32> {
    // u32::from_str would accept a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInputError::invalid_token(position, token));
    }
    token
        .parse()
        .map_err(|_| InvalidInputError::invalid_token(position, token))
}

impl FromStr for CoordinateList {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_values(s)?)
    }
}

impl TryFrom<Vec<u32>> for CoordinateList {
    type Error = InvalidInputError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<String> for CoordinateList {
    type Error = InvalidInputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CoordinateList> for String {
    fn from(list: CoordinateList) -> Self {
        list.to_string()
    }
}

impl fmt::Display for CoordinateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl JsonSchema for CoordinateList {
    fn schema_name() -> String {
        "CoordinateList".to_owned()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        let mut schema = String::json_schema(gen).into_object();
        schema.string().pattern = Some(COORDINATE_PATTERN.to_owned());
        schema.metadata().description = Some(
            "Comma-separated alternating x,y pixel coordinates with an even number of values"
                .to_owned(),
        );
        schema.into()
    }
}
