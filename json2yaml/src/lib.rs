//! # json2yaml
//!
//! Core traits for decoding and encoding in the json2yaml converter.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every format
//! crate implements. A format backend is nothing more than a set of impls,
//! so a backend can be replaced without touching the code that sits
//! between two formats.
//!
//! ## Overview
//!
//! The two conversion chains look like this:
//! ```text
//! Json → Value → Yaml
//! Yaml → Node → Value → Json
//! ```
//!
//! `Node` is a YAML tree whose mapping keys can be any node. The
//! `Node → Value` step is the normalization that makes it legal JSON.
//!
//! ## Example
//!
//! ```ignore
//! use json2yaml::decoder::Decoder;
//! use json2yaml::encoder::Encoder;
//! use json::Json;
//! use value::Value;
//! use yaml::Yaml;
//!
//! let json = Json::new(r#"{"a": [1, 2]}"#);
//! let value: Value = json.decode()?;
//! let yaml: Yaml = value.encode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
