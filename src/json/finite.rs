// === NON-FINITE NUMBER PROBE ===
//
// serde_json silently writes NaN and the infinities as `null`. This probe
// walks a `Serialize` value once, without building any output, and stops at
// the first float JSON cannot represent.

use serde::ser::{self, Serialize, Serializer};
use std::fmt;

use crate::error::EncodeError;

#[derive(Debug)]
pub(crate) enum ProbeError {
    NonFinite(f64),
    Custom(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::NonFinite(value) => write!(f, "non-finite number {}", value),
            ProbeError::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ProbeError {}

impl ser::Error for ProbeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ProbeError::Custom(msg.to_string())
    }
}

impl From<ProbeError> for EncodeError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::NonFinite(value) => EncodeError::NonFiniteNumber(value.to_string()),
            ProbeError::Custom(msg) => EncodeError::Serialization(msg),
        }
    }
}

/// Fails if `value` contains NaN or an infinity anywhere, keys included.
pub(crate) fn ensure_finite<T: Serialize + ?Sized>(value: &T) -> Result<(), EncodeError> {
    value.serialize(FiniteProbe).map_err(EncodeError::from)
}

#[derive(Clone, Copy)]
struct FiniteProbe;

fn check_float(value: f64) -> Result<(), ProbeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProbeError::NonFinite(value))
    }
}

impl Serializer for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<(), ProbeError> {
        check_float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), ProbeError> {
        check_float(v)
    }

    fn serialize_char(self, _v: char) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, ProbeError> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, ProbeError> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self, ProbeError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, ProbeError> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, ProbeError> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self, ProbeError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, ProbeError> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        key.serialize(*self)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteProbe {
    type Ok = ();
    type Error = ProbeError;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<(), ProbeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), ProbeError> {
        Ok(())
    }
}
