//! Encoder trait, the reverse direction of [`crate::decoder::Decoder`].

/// Encoder trait for converting a tree `T` into a representation `E`.
///
/// ```ignore
/// use json2yaml::encoder::Encoder;
/// use json::Json;
/// use yaml::Yaml;
///
/// let json: Json = value.encode()?;
/// let yaml: Yaml = value.encode()?;
/// ```
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
