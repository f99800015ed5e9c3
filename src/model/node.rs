use std::fmt;

use geo::Point;

use crate::Error;

/// Canonical identifier of a graph node.
///
/// A key is the representative coordinate of the node rendered as
/// `"lon,lat"` with shortest round-trip `f64` formatting, so the
/// representative can always be recovered with [`NodeKey::to_point`].
/// Every coordinate merged into the node lies within the build tolerance
/// of that representative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(Box<str>);

impl NodeKey {
    pub fn from_point(point: Point<f64>) -> Self {
        Self(format!("{},{}", point.x(), point.y()).into_boxed_str())
    }

    /// Parses the representative coordinate back out of the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key was not produced by [`NodeKey::from_point`].
    pub fn to_point(&self) -> Result<Point<f64>, Error> {
        let (lon, lat) = self
            .0
            .split_once(',')
            .ok_or_else(|| Error::InvalidNodeKey(self.0.to_string()))?;
        let lon: f64 = lon
            .parse()
            .map_err(|_| Error::InvalidNodeKey(self.0.to_string()))?;
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::InvalidNodeKey(self.0.to_string()))?;
        Ok(Point::new(lon, lat))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
