use core::fmt;
use core::num::ParseFloatError;
use core::str::FromStr;

use crate::vector::Vector2;

const COMPONENTS: [&str; 2] = ["x", "y"];
const DEFAULT_PRECISION: usize = 6;

/// Error returned when text does not start with two whitespace-separated
/// floats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVector2Error {
    kind: ParseVector2ErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ParseVector2ErrorKind {
    Missing { component: &'static str },
    Invalid { component: &'static str, source: ParseFloatError },
}

impl ParseVector2Error {
    fn missing(index: usize) -> Self {
        Self {
            kind: ParseVector2ErrorKind::Missing {
                component: COMPONENTS[index],
            },
        }
    }

    fn invalid(index: usize, source: ParseFloatError) -> Self {
        Self {
            kind: ParseVector2ErrorKind::Invalid {
                component: COMPONENTS[index],
                source,
            },
        }
    }

    /// The float conversion failure, if a component token was malformed.
    pub fn float_error(&self) -> Option<&ParseFloatError> {
        match &self.kind {
            ParseVector2ErrorKind::Invalid { source, .. } => Some(source),
            ParseVector2ErrorKind::Missing { .. } => None,
        }
    }
}

impl fmt::Display for ParseVector2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseVector2ErrorKind::Missing { component } => {
                write!(f, "missing `{}` component, expected `x y`", component)
            }
            ParseVector2ErrorKind::Invalid { component, source } => {
                write!(f, "invalid `{}` component: {}", component, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseVector2Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.float_error()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// Reads `x y` from the first two whitespace-separated tokens. Anything after
/// `y` is ignored.
impl FromStr for Vector2 {
    type Err = ParseVector2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut components = [0.0f32; 2];
        for (index, component) in components.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| ParseVector2Error::missing(index))?;
            *component = token
                .parse()
                .map_err(|err| ParseVector2Error::invalid(index, err))?;
        }
        Ok(components.into())
    }
}

/// Writes `x y` with six fractional digits per component, like `%f`.
///
/// A precision such as `{:.3}` overrides the digit count. The alternate form
/// `{:#}` writes the shortest text that parses back to the same components.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            None if f.alternate() => write!(f, "{} {}", self.x, self.y),
            precision => {
                let precision = precision.unwrap_or(DEFAULT_PRECISION);
                write!(f, "{:.*} {:.*}", precision, self.x, precision, self.y)
            }
        }
    }
}
