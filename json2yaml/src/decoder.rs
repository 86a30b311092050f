//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. Format crates use it to turn text into trees and trees into other
//! trees.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! A source type may implement `Decoder` for several destinations; the
//! destination is picked by the type annotation at the call site.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use json2yaml::decoder::{DecodableFrom, Decoder};
//!
//! struct Source(Vec<u8>);
//! struct Dest(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Source> for Dest {}
//!
//! impl Decoder<Source, Dest> for Source {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Dest, Self::Error> {
//!         String::from_utf8(self.0.clone()).map(Dest).map_err(|_| MyError)
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T`. The destination type
/// must implement `DecodableFrom<T>`.
///
/// # Examples
///
/// ```ignore
/// use json2yaml::decoder::Decoder;
/// use yaml::{Node, Yaml};
/// use value::Value;
///
/// let node: Node = Yaml::new("{7: a}").decode()?;
/// let value: Value = node.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. Implement it for each valid pair:
///
/// ```no_run
/// use json2yaml::decoder::DecodableFrom;
///
/// struct Text;
/// struct Tree;
///
/// impl DecodableFrom<Text> for Tree {}
/// ```
pub trait DecodableFrom<T> {}
