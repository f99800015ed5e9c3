use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid GeoJSON input: {0}")]
    InvalidGeoJson(#[from] geojson::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Malformed node key: {0}")]
    InvalidNodeKey(String),
}
