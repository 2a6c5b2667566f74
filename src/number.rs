// SPDX-License-Identifier: MIT OR Apache-2.0
//! Number representation
//!
//! Numbers keep the exact text they were written with, so that the base,
//! precision and magnitude survive until a conversion is actually requested.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::BigInt;
use thiserror::Error;

use crate::grammar::parse_number;

/// Exponents beyond this are refused by [`Number::to_decimal`] instead of
/// allocating an absurd mantissa
const MAX_DECIMAL_EXPONENT: i64 = 1 << 16;

/// A numeric value, stored as its (validated) source text
///
/// Two numbers are equal when they write out the same, so `0x10`, `+16` and
/// `1_6` are all equal while `16` and `16.0` are not.
#[derive(Clone)]
pub struct Number(String);

/// The base a number was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
	Binary = 2,
	Octal = 8,
	Decimal = 10,
	Hexadecimal = 16,
}

/// The keyword numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
	/// `#inf`
	Infinity,
	/// `#-inf`
	NegInfinity,
	/// `#nan`
	NaN,
}

/// Whoops! That number doesn't fit the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
	#[error("Number out of range")]
	OutOfRange,
	#[error("Number has a fraction or exponent and can't be converted to an integer")]
	NotAnInteger,
	#[error("`#inf`, `#-inf` and `#nan` only convert to floating point types")]
	NotFinite,
	#[error("Bad number syntax")]
	BadSyntax,
}

/// Split out from a raw number: sign, base and the digits after any prefix
struct Parts<'a> {
	negative: bool,
	radix: Radix,
	digits: &'a str,
}

impl Number {
	/// Wrap already-validated number text
	pub(crate) fn from_raw(text: impl Into<String>) -> Self { Self(text.into()) }
	/// The number exactly as written
	pub fn raw(&self) -> &str { &self.0 }
	/// Which keyword number this is, if any
	pub fn special(&self) -> Option<Special> {
		match self.0.as_str() {
			"#inf" => Some(Special::Infinity),
			"#-inf" => Some(Special::NegInfinity),
			"#nan" => Some(Special::NaN),
			_ => None,
		}
	}
	/// The base the number was written in, keyword numbers count as decimal
	pub fn radix(&self) -> Radix { self.parts().radix }
	/// Whether this number has neither fraction nor exponent
	pub fn is_integer(&self) -> bool {
		let parts = self.parts();
		self.special().is_none()
			&& (parts.radix != Radix::Decimal || !parts.digits.contains(['.', 'e', 'E']))
	}
	fn parts(&self) -> Parts<'_> {
		let text = self.0.as_str();
		let (negative, text) = match text.as_bytes().first() {
			Some(b'-') => (true, &text[1..]),
			Some(b'+') => (false, &text[1..]),
			_ => (false, text),
		};
		let (radix, digits) = match text.as_bytes() {
			[b'0', b'b', ..] => (Radix::Binary, &text[2..]),
			[b'0', b'o', ..] => (Radix::Octal, &text[2..]),
			[b'0', b'x', ..] => (Radix::Hexadecimal, &text[2..]),
			_ => (Radix::Decimal, text),
		};
		Parts {
			negative,
			radix,
			digits,
		}
	}
	/// Exact integer value
	pub fn to_big_int(&self) -> Result<BigInt, NumberError> {
		if self.special().is_some() {
			return Err(NumberError::NotFinite);
		}
		if !self.is_integer() {
			return Err(NumberError::NotAnInteger);
		}
		let parts = self.parts();
		let digits = strip_underscores(parts.digits);
		let value = BigInt::parse_bytes(digits.as_bytes(), parts.radix as u32)
			.ok_or(NumberError::BadSyntax)?;
		Ok(if parts.negative { -value } else { value })
	}
	fn to_integer<T>(&self) -> Result<T, NumberError>
	where
		T: for<'a> TryFrom<&'a BigInt>,
	{
		T::try_from(&self.to_big_int()?).map_err(|_| NumberError::OutOfRange)
	}
	pub fn to_i32(&self) -> Result<i32, NumberError> { self.to_integer() }
	pub fn to_i64(&self) -> Result<i64, NumberError> { self.to_integer() }
	pub fn to_u64(&self) -> Result<u64, NumberError> { self.to_integer() }
	/// Closest double, only fails when a finite literal overflows
	pub fn to_f64(&self) -> Result<f64, NumberError> {
		let value = match self.special() {
			Some(Special::Infinity) => return Ok(f64::INFINITY),
			Some(Special::NegInfinity) => return Ok(f64::NEG_INFINITY),
			Some(Special::NaN) => return Ok(f64::NAN),
			None if self.radix() == Radix::Decimal => strip_underscores(&self.0)
				.parse::<f64>()
				.map_err(|_| NumberError::BadSyntax)?,
			None => self
				.to_big_int()?
				.to_string()
				.parse::<f64>()
				.map_err(|_| NumberError::BadSyntax)?,
		};
		if value.is_infinite() { Err(NumberError::OutOfRange) } else { Ok(value) }
	}
	pub fn to_f32(&self) -> Result<f32, NumberError> {
		let value = match self.special() {
			Some(Special::Infinity) => return Ok(f32::INFINITY),
			Some(Special::NegInfinity) => return Ok(f32::NEG_INFINITY),
			Some(Special::NaN) => return Ok(f32::NAN),
			None if self.radix() == Radix::Decimal => strip_underscores(&self.0)
				.parse::<f32>()
				.map_err(|_| NumberError::BadSyntax)?,
			None => self
				.to_big_int()?
				.to_string()
				.parse::<f32>()
				.map_err(|_| NumberError::BadSyntax)?,
		};
		if value.is_infinite() { Err(NumberError::OutOfRange) } else { Ok(value) }
	}
	/// Exact decimal value, fractions included
	pub fn to_decimal(&self) -> Result<Decimal, NumberError> {
		if self.special().is_some() {
			return Err(NumberError::NotFinite);
		}
		if self.is_integer() {
			return Ok(Decimal {
				mantissa: self.to_big_int()?,
				scale: 0,
			});
		}
		let parts = self.parts();
		let digits = strip_underscores(parts.digits);
		let (significand, exponent) = match digits.split_once(['e', 'E']) {
			Some((significand, exponent)) => (
				significand,
				exponent.parse::<i64>().map_err(|_| NumberError::OutOfRange)?,
			),
			None => (digits.as_str(), 0),
		};
		let (int, frac) = significand.split_once('.').unwrap_or((significand, ""));
		if exponent.abs() > MAX_DECIMAL_EXPONENT {
			return Err(NumberError::OutOfRange);
		}
		let mut mantissa = BigInt::parse_bytes(format!("{int}{frac}").as_bytes(), 10)
			.ok_or(NumberError::BadSyntax)?;
		if parts.negative {
			mantissa = -mantissa;
		}
		let scale = frac.len() as i64 - exponent;
		Ok(if scale < 0 {
			Decimal {
				mantissa: mantissa * BigInt::from(10).pow(scale.unsigned_abs() as u32),
				scale: 0,
			}
		} else {
			Decimal {
				mantissa,
				scale: scale as u32,
			}
		})
	}
	/// Text this number is written back out as:
	/// underscores and a leading `+` are dropped, other bases become decimal
	pub fn to_canonical_string(&self) -> String {
		if self.special().is_some() {
			return self.0.clone();
		}
		let parts = self.parts();
		if parts.radix == Radix::Decimal {
			let text = strip_underscores(&self.0);
			match text.strip_prefix('+') {
				Some(rest) => rest.to_owned(),
				None => text,
			}
		} else {
			self.to_big_int().map_or_else(|_| self.0.clone(), |value| value.to_string())
		}
	}
}

fn strip_underscores(text: &str) -> String { text.chars().filter(|&ch| ch != '_').collect() }

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool { self.0 == other.0 || self.to_canonical_string() == other.to_canonical_string() }
}
impl Eq for Number {}
impl Hash for Number {
	fn hash<H: Hasher>(&self, state: &mut H) { self.to_canonical_string().hash(state) }
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.to_canonical_string()) }
}
impl fmt::Debug for Number {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "Number({})", self.0) }
}

impl FromStr for Number {
	type Err = NumberError;
	/// Parses a number from kdl-equivalent string
	fn from_str(text: &str) -> Result<Self, Self::Err> { parse_number(text) }
}

macro_rules! impl_int {
	($($t:ident)*) => {$(
		impl From<$t> for Number {
			fn from(value: $t) -> Self { Self(value.to_string()) }
		}
		impl TryFrom<&Number> for $t {
			type Error = NumberError;
			fn try_from(value: &Number) -> Result<Self, Self::Error> { value.to_integer() }
		}
		impl TryFrom<Number> for $t {
			type Error = NumberError;
			fn try_from(value: Number) -> Result<Self, Self::Error> { value.to_integer() }
		}
	)*};
}
impl_int!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

macro_rules! impl_float {
	($($t:ident $to:ident)*) => {$(
		impl From<$t> for Number {
			fn from(value: $t) -> Self {
				Self(if value.is_nan() {
					"#nan".to_owned()
				} else if value.is_infinite() {
					if value.is_sign_negative() { "#-inf" } else { "#inf" }.to_owned()
				} else {
					// debug fmt keeps the `.0` so it reads back as a float
					format!("{value:?}")
				})
			}
		}
		impl TryFrom<&Number> for $t {
			type Error = NumberError;
			fn try_from(value: &Number) -> Result<Self, Self::Error> { value.$to() }
		}
		impl TryFrom<Number> for $t {
			type Error = NumberError;
			fn try_from(value: Number) -> Result<Self, Self::Error> { value.$to() }
		}
	)*};
}
impl_float!(f32 to_f32 f64 to_f64);

impl From<BigInt> for Number {
	fn from(value: BigInt) -> Self { Self(value.to_string()) }
}

/// An exact decimal: `mantissa * 10^-scale`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
	mantissa: BigInt,
	scale: u32,
}

impl Decimal {
	pub fn mantissa(&self) -> &BigInt { &self.mantissa }
	/// Number of digits after the decimal point
	pub fn scale(&self) -> u32 { self.scale }
}

impl fmt::Display for Decimal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let digits = self.mantissa.magnitude().to_string();
		if self.mantissa.sign() == num_bigint::Sign::Minus {
			f.write_str("-")?;
		}
		let scale = self.scale as usize;
		if scale == 0 {
			return f.write_str(&digits);
		}
		if digits.len() > scale {
			let (int, frac) = digits.split_at(digits.len() - scale);
			write!(f, "{int}.{frac}")
		} else {
			write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
		}
	}
}
