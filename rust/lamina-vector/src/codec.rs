//! Pure conversions between raw fixed-width values and domain values.

use chrono::{DateTime, Utc};

use crate::element::FixedWidthElement;
use crate::field::ElementType;

/// A stateless conversion between the raw on-buffer representation and a
/// richer domain value.
///
/// Codecs are pure: the same input always yields the same output, and no
/// state is carried between calls. A codec never touches the storage
/// contract; it is applied only at the decoded access boundary. The
/// storage layer accepts every raw bit pattern; a codec whose domain
/// value cannot represent the full raw range documents that range and
/// fails fast on raws outside it.
pub trait TypeCodec {
    /// The raw fixed-width representation stored in the value buffer.
    type Raw: FixedWidthElement;

    /// The decoded domain value.
    type Value;

    /// The type descriptor tag vectors of this codec carry.
    fn element_type() -> ElementType;

    /// Decodes a raw value into the domain value.
    ///
    /// # Panics
    ///
    /// Panics if `raw` lies outside the codec's documented domain.
    fn decode(raw: Self::Raw) -> Self::Value;

    /// Encodes a domain value into its raw representation. Precision below
    /// the raw granularity is truncated, not rounded.
    fn encode(value: &Self::Value) -> Self::Raw;
}

/// The identity codec for plain primitive vectors.
pub struct IdentityCodec<T>(std::marker::PhantomData<T>);

impl<T: FixedWidthElement> TypeCodec for IdentityCodec<T> {
    type Raw = T;
    type Value = T;

    fn element_type() -> ElementType {
        T::ELEMENT_TYPE
    }

    #[inline]
    fn decode(raw: T) -> T {
        raw
    }

    #[inline]
    fn encode(value: &T) -> T {
        *value
    }
}

/// Signed 64-bit epoch seconds decoded as a UTC calendar timestamp.
pub struct TimestampSecCodec;

impl TypeCodec for TimestampSecCodec {
    type Raw = i64;
    type Value = DateTime<Utc>;

    fn element_type() -> ElementType {
        ElementType::TimestampSec
    }

    fn decode(raw: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(raw, 0).expect("epoch seconds out of calendar range")
    }

    fn encode(value: &DateTime<Utc>) -> i64 {
        value.timestamp()
    }
}

/// Signed 64-bit epoch milliseconds decoded as a UTC calendar timestamp.
pub struct TimestampMilliCodec;

impl TypeCodec for TimestampMilliCodec {
    type Raw = i64;
    type Value = DateTime<Utc>;

    fn element_type() -> ElementType {
        ElementType::TimestampMilli
    }

    fn decode(raw: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(raw).expect("epoch milliseconds out of calendar range")
    }

    fn encode(value: &DateTime<Utc>) -> i64 {
        value.timestamp_millis()
    }
}

/// Signed 64-bit epoch microseconds decoded as a UTC calendar timestamp.
///
/// Decoding splits the offset into whole seconds (`micros div 1_000_000`)
/// and a nanosecond remainder (`micros mod 1_000_000`, times 1000); no
/// timezone adjustment is performed. Encoding truncates sub-microsecond
/// precision.
///
/// Offsets whose calendar instant falls outside the representable range
/// of [`DateTime<Utc>`] (roughly ±262,000 years from the epoch) are not
/// part of this codec's domain; decoding such an offset panics. Within
/// the domain, `encode(decode(raw)) == raw` holds exactly. The second
/// and millisecond codecs share the same constraint at their
/// granularity; the nanosecond codec decodes every `i64`.
pub struct TimestampMicroCodec;

impl TypeCodec for TimestampMicroCodec {
    type Raw = i64;
    type Value = DateTime<Utc>;

    fn element_type() -> ElementType {
        ElementType::TimestampMicro
    }

    fn decode(raw: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_micros(raw).expect("epoch microseconds out of calendar range")
    }

    fn encode(value: &DateTime<Utc>) -> i64 {
        value.timestamp_micros()
    }
}

/// Signed 64-bit epoch nanoseconds decoded as a UTC calendar timestamp.
pub struct TimestampNanoCodec;

impl TypeCodec for TimestampNanoCodec {
    type Raw = i64;
    type Value = DateTime<Utc>;

    fn element_type() -> ElementType {
        ElementType::TimestampNano
    }

    fn decode(raw: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(raw)
    }

    fn encode(value: &DateTime<Utc>) -> i64 {
        value
            .timestamp_nanos_opt()
            .expect("calendar timestamp out of epoch nanosecond range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_micro_decode() {
        let ts = TimestampMicroCodec::decode(1_000_000);
        assert_eq!(ts, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap());

        let epoch = TimestampMicroCodec::decode(0);
        assert_eq!(epoch, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());

        // Negative offsets land before the epoch.
        let before = TimestampMicroCodec::decode(-1_500_000);
        assert_eq!(before.timestamp(), -2);
        assert_eq!(before.timestamp_subsec_micros(), 500_000);
    }

    #[test]
    fn test_micro_round_trip() {
        for raw in [0i64, 1, -1, 123_456_789, -987_654_321, 1_695_000_000_000_000] {
            assert_eq!(TimestampMicroCodec::encode(&TimestampMicroCodec::decode(raw)), raw);
        }
    }

    #[test]
    fn test_micro_round_trip_randomized() {
        // Any instant representable at microsecond granularity survives
        // decode(encode(t)) intact.
        for _ in 0..1000 {
            let raw = fastrand::i64(-100_000_000_000_000..100_000_000_000_000);
            let decoded = TimestampMicroCodec::decode(raw);
            assert_eq!(TimestampMicroCodec::decode(TimestampMicroCodec::encode(&decoded)), decoded);
        }
    }

    #[test]
    #[should_panic(expected = "out of calendar range")]
    fn test_micro_decode_beyond_calendar_range_panics() {
        // Every i64 is storable, but offsets past the calendar range are
        // outside the codec's domain.
        let _ = TimestampMicroCodec::decode(i64::MAX);
    }

    #[test]
    fn test_nano_decode_covers_full_raw_range() {
        for raw in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(TimestampNanoCodec::encode(&TimestampNanoCodec::decode(raw)), raw);
        }
    }

    #[test]
    fn test_micro_encode_truncates() {
        let ts = DateTime::from_timestamp(10, 123_456_789).unwrap();
        assert_eq!(TimestampMicroCodec::encode(&ts), 10_123_456);
    }

    #[test]
    fn test_granularity_family() {
        let instant = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
        assert_eq!(TimestampSecCodec::encode(&instant), 1_000_000_000);
        assert_eq!(TimestampMilliCodec::encode(&instant), 1_000_000_000_000);
        assert_eq!(TimestampMicroCodec::encode(&instant), 1_000_000_000_000_000);
        assert_eq!(TimestampNanoCodec::encode(&instant), 1_000_000_000_000_000_000);

        assert_eq!(TimestampSecCodec::decode(1_000_000_000), instant);
        assert_eq!(TimestampMilliCodec::decode(1_000_000_000_000), instant);
        assert_eq!(TimestampMicroCodec::decode(1_000_000_000_000_000), instant);
        assert_eq!(TimestampNanoCodec::decode(1_000_000_000_000_000_000), instant);
    }

    #[test]
    fn test_identity_codec() {
        assert_eq!(IdentityCodec::<i32>::decode(7), 7);
        assert_eq!(IdentityCodec::<i32>::encode(&-7), -7);
        assert_eq!(IdentityCodec::<f64>::element_type(), ElementType::Float64);
    }
}
