//! Logical field descriptors for vectors.

/// The declared storage type of a vector's elements.
///
/// Several element types may share a raw representation: `TimestampMicro`
/// is stored as `Int64` bytes but is decoded differently. Transfer between
/// vectors requires identical `ElementType` tags, not merely equal widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    TimestampSec,
    TimestampMilli,
    TimestampMicro,
    TimestampNano,
}

impl ElementType {
    /// Width of one element of this type in bytes.
    pub fn width(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::UInt8 => 1,
            ElementType::Int16 | ElementType::UInt16 => 2,
            ElementType::Int32 | ElementType::UInt32 | ElementType::Float32 => 4,
            ElementType::Int64
            | ElementType::UInt64
            | ElementType::Float64
            | ElementType::TimestampSec
            | ElementType::TimestampMilli
            | ElementType::TimestampMicro
            | ElementType::TimestampNano => 8,
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementType::Int8 => "int8",
            ElementType::Int16 => "int16",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::UInt8 => "uint8",
            ElementType::UInt16 => "uint16",
            ElementType::UInt32 => "uint32",
            ElementType::UInt64 => "uint64",
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::TimestampSec => "timestamp[s]",
            ElementType::TimestampMilli => "timestamp[ms]",
            ElementType::TimestampMicro => "timestamp[us]",
            ElementType::TimestampNano => "timestamp[ns]",
        };
        f.write_str(name)
    }
}

/// The logical name and declared type of a vector, supplied at construction.
///
/// The vector does not validate descriptor consistency beyond matching the
/// element width at construction and the element type on transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    element_type: ElementType,
    nullable: bool,
}

impl Field {
    /// Creates a field descriptor.
    pub fn new(name: impl Into<String>, element_type: ElementType, nullable: bool) -> Field {
        Field {
            name: name.into(),
            element_type,
            nullable,
        }
    }

    /// Creates a nullable field descriptor.
    pub fn nullable(name: impl Into<String>, element_type: ElementType) -> Field {
        Field::new(name, element_type, true)
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared element type.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns `true` if slots of this field may be null.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns a copy of this descriptor under a different name, as used
    /// when constructing a transfer target.
    pub fn with_name(&self, name: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            element_type: self.element_type,
            nullable: self.nullable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(ElementType::Int8.width(), 1);
        assert_eq!(ElementType::UInt16.width(), 2);
        assert_eq!(ElementType::Float32.width(), 4);
        assert_eq!(ElementType::Int64.width(), 8);
        assert_eq!(ElementType::TimestampMicro.width(), 8);
    }

    #[test]
    fn test_with_name() {
        let field = Field::nullable("ts", ElementType::TimestampMicro);
        let renamed = field.with_name("ts2");
        assert_eq!(renamed.name(), "ts2");
        assert_eq!(renamed.element_type(), ElementType::TimestampMicro);
        assert!(renamed.is_nullable());
    }
}
