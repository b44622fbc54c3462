//! Column definitions and the chained modifier handle.
//!
//! A [`ColumnDefinition`] only accumulates modifier state. Grammars read it
//! once the describing closure has returned.

use serde::{Deserialize, Serialize};

/// Spatial sub-type of a geometry column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialKind {
    /// Any geometry.
    Geometry,
    /// A single point.
    Point,
    /// A line string.
    LineString,
    /// A polygon.
    Polygon,
    /// A collection of points.
    MultiPoint,
    /// A collection of line strings.
    MultiLineString,
    /// A collection of polygons.
    MultiPolygon,
    /// A heterogeneous collection of geometries.
    GeometryCollection,
}

impl SpatialKind {
    /// Returns the upper-case SQL name of the sub-type.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Geometry => "GEOMETRY",
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

/// The closed set of column types a blueprint can describe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Boolean.
    Boolean,
    /// Fixed-length character string.
    Char {
        /// Length in characters.
        length: u32,
    },
    /// Variable-length character string.
    String {
        /// Maximum length in characters.
        length: u32,
    },
    /// Tiny text.
    TinyText,
    /// Text.
    Text,
    /// Medium text.
    MediumText,
    /// Long text.
    LongText,
    /// 8-bit integer.
    TinyInteger,
    /// 16-bit integer.
    SmallInteger,
    /// 24-bit integer.
    MediumInteger,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInteger,
    /// Exact numeric with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: u8,
        /// Digits after the decimal point.
        scale: u8,
    },
    /// Single precision float.
    Float {
        /// Optional binary precision.
        precision: Option<u8>,
    },
    /// Double precision float.
    Double,
    /// Date only.
    Date,
    /// Time without time zone.
    Time {
        /// Fractional-second precision.
        precision: Option<u8>,
    },
    /// Time with time zone.
    TimeTz {
        /// Fractional-second precision.
        precision: Option<u8>,
    },
    /// Date and time without time zone.
    DateTime {
        /// Fractional-second precision.
        precision: Option<u8>,
    },
    /// Date and time with time zone.
    DateTimeTz {
        /// Fractional-second precision.
        precision: Option<u8>,
    },
    /// Timestamp without time zone.
    Timestamp {
        /// Fractional-second precision.
        precision: Option<u8>,
    },
    /// Timestamp with time zone.
    TimestampTz {
        /// Fractional-second precision.
        precision: Option<u8>,
    },
    /// Year.
    Year,
    /// Binary data.
    Binary,
    /// JSON document.
    Json,
    /// Binary JSON document.
    Jsonb,
    /// UUID.
    Uuid,
    /// String restricted to a set of values.
    Enum {
        /// Allowed values, in declaration order.
        allowed: Vec<String>,
    },
    /// Spatial column.
    Spatial {
        /// Geometry sub-type.
        kind: SpatialKind,
        /// Spatial reference system identifier.
        srid: Option<u32>,
    },
}

impl ColumnType {
    /// Returns whether this is one of the integer types.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::TinyInteger
                | Self::SmallInteger
                | Self::MediumInteger
                | Self::Integer
                | Self::BigInteger
        )
    }

    /// Returns whether this is a numeric type (integer or fractional).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(
                self,
                Self::Decimal { .. } | Self::Float { .. } | Self::Double
            )
    }

    /// Returns whether this is a date or time type.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date
                | Self::Time { .. }
                | Self::TimeTz { .. }
                | Self::DateTime { .. }
                | Self::DateTimeTz { .. }
                | Self::Timestamp { .. }
                | Self::TimestampTz { .. }
        )
    }

    fn with_precision(&self, precision: u8) -> Self {
        let p = Some(precision);
        match self {
            Self::Time { .. } => Self::Time { precision: p },
            Self::TimeTz { .. } => Self::TimeTz { precision: p },
            Self::DateTime { .. } => Self::DateTime { precision: p },
            Self::DateTimeTz { .. } => Self::DateTimeTz { precision: p },
            Self::Timestamp { .. } => Self::Timestamp { precision: p },
            Self::TimestampTz { .. } => Self::TimestampTz { precision: p },
            Self::Float { .. } => Self::Float { precision: p },
            other => other.clone(),
        }
    }
}

/// Default value for a column.
///
/// Grammars render it through a single renderer, so a default is formatted
/// the same way in CREATE and ALTER statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default, quoted when rendered.
    String(String),
    /// Raw SQL expression (e.g. `CURRENT_TIMESTAMP`), never quoted.
    Expression(String),
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for DefaultValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A single column as described by a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Column type and its parameters.
    pub column_type: ColumnType,
    /// Whether the column accepts NULL. Columns are NOT NULL unless marked.
    pub nullable: bool,
    /// Default value, if any.
    pub default: Option<DefaultValue>,
    /// Column comment.
    pub comment: Option<String>,
    /// Column collation.
    pub collation: Option<String>,
    /// Whether a numeric column is unsigned (ignored where unsupported).
    pub unsigned: bool,
    /// Whether the column auto-increments.
    pub auto_increment: bool,
    /// Whether the column is (part of) the primary key.
    pub primary: bool,
    /// Explicit primary key constraint name.
    pub primary_name: Option<String>,
    /// Whether the column carries its own unique index.
    pub unique: bool,
    /// Explicit name for the inline unique index.
    pub unique_name: Option<String>,
    /// Whether the column carries its own plain index.
    pub index: bool,
    /// Explicit name for the inline index.
    pub index_name: Option<String>,
    /// Whether this column alters an existing one instead of adding it.
    pub change: bool,
}

impl ColumnDefinition {
    /// Creates a NOT NULL column with no modifiers.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            default: None,
            comment: None,
            collation: None,
            unsigned: false,
            auto_increment: false,
            primary: false,
            primary_name: None,
            unique: false,
            unique_name: None,
            index: false,
            index_name: None,
            change: false,
        }
    }
}

/// Chaining handle for a column owned by a [`Blueprint`](super::Blueprint).
///
/// The handle points into the blueprint's column list by position, so every
/// modifier is visible through the blueprint once the chain ends.
///
/// ```rust
/// use oxide_schema_core::Blueprint;
///
/// let mut table = Blueprint::new("users");
/// table.string("email", 255).nullable().unique();
///
/// let email = &table.columns()[0];
/// assert!(email.nullable);
/// assert!(email.unique);
/// ```
#[derive(Debug)]
pub struct ColumnHandle<'a> {
    columns: &'a mut Vec<ColumnDefinition>,
    position: usize,
}

impl<'a> ColumnHandle<'a> {
    pub(crate) fn new(columns: &'a mut Vec<ColumnDefinition>, position: usize) -> Self {
        Self { columns, position }
    }

    fn column(&mut self) -> &mut ColumnDefinition {
        &mut self.columns[self.position]
    }

    /// Returns the definition as it currently stands.
    #[must_use]
    pub fn definition(&self) -> &ColumnDefinition {
        &self.columns[self.position]
    }

    /// Allows NULL values.
    pub fn nullable(mut self) -> Self {
        self.column().nullable = true;
        self
    }

    /// Sets the default value.
    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.column().default = Some(value.into());
        self
    }

    /// Sets a raw SQL expression as the default.
    pub fn default_raw(mut self, expression: impl Into<String>) -> Self {
        self.column().default = Some(DefaultValue::Expression(expression.into()));
        self
    }

    /// Defaults the column to `CURRENT_TIMESTAMP`.
    pub fn use_current(self) -> Self {
        self.default_raw("CURRENT_TIMESTAMP")
    }

    /// Attaches a comment to the column.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.column().comment = Some(comment.into());
        self
    }

    /// Sets the column collation.
    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.column().collation = Some(collation.into());
        self
    }

    /// Sets the fractional-second precision of a time column, or the
    /// precision of a float column. Other types are left untouched.
    pub fn precision(mut self, precision: u8) -> Self {
        let column = self.column();
        column.column_type = column.column_type.with_precision(precision);
        self
    }

    /// Marks a numeric column as unsigned.
    pub fn unsigned(mut self) -> Self {
        self.column().unsigned = true;
        self
    }

    /// Marks the column as auto-incrementing. This implies the primary key.
    pub fn auto_increment(mut self) -> Self {
        let column = self.column();
        column.auto_increment = true;
        column.primary = true;
        self
    }

    /// Makes the column (part of) the primary key.
    pub fn primary(mut self) -> Self {
        self.column().primary = true;
        self
    }

    /// Makes the column the primary key under an explicit constraint name.
    pub fn primary_named(mut self, name: impl Into<String>) -> Self {
        let column = self.column();
        column.primary = true;
        column.primary_name = Some(name.into());
        self
    }

    /// Adds a unique index on this column.
    pub fn unique(mut self) -> Self {
        self.column().unique = true;
        self
    }

    /// Adds a unique index on this column under an explicit name.
    pub fn unique_named(mut self, name: impl Into<String>) -> Self {
        let column = self.column();
        column.unique = true;
        column.unique_name = Some(name.into());
        self
    }

    /// Adds a plain index on this column.
    pub fn index(mut self) -> Self {
        self.column().index = true;
        self
    }

    /// Adds a plain index on this column under an explicit name.
    pub fn index_named(mut self, name: impl Into<String>) -> Self {
        let column = self.column();
        column.index = true;
        column.index_name = Some(name.into());
        self
    }

    /// Marks the column as a change to an existing column.
    pub fn change(mut self) -> Self {
        self.column().change = true;
        self
    }
}
