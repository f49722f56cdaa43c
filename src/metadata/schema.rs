//! Fixed field-name → type schema of the session metadata files.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Declared type of a metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Signed integer value
    Integer,
    /// Double-precision real value
    Real,
    /// Free text
    Text,
}

impl FieldType {
    /// Human-readable type name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Real => "real",
            FieldType::Text => "string",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of the session metadata schema.
///
/// The variant order matches the column order used by the dataset's own
/// metadata files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanField {
    /// `n_expt`: experiment index within the session
    ExperimentIndex,
    /// `id`: dataset-wide unique scan identifier
    Id,
    /// `phant_id`: phantom identifier, e.g. `A2F4`
    PhantomId,
    /// `tum_rad`: tumour radius in cm
    TumorRadius,
    /// `tum_shape`: tumour shape descriptor
    TumorShape,
    /// `tum_x`: tumour x position in cm
    TumorX,
    /// `tum_y`: tumour y position in cm
    TumorY,
    /// `tum_z`: tumour z position in cm
    TumorZ,
    /// `birads`: BI-RADS breast density class
    Birads,
    /// `adi_vol`: adipose shell volume
    AdiposeVolume,
    /// `fib_vol`: fibroglandular shell volume
    FibroglandularVolume,
    /// `adi_ref_id`: id of the adipose-only reference scan
    AdiposeRefId,
    /// `emp_ref_id`: id of the empty-chamber reference scan
    EmptyRefId,
    /// `date`: session date
    Date,
    /// `n_session`: session index
    SessionIndex,
    /// `ant_rad`: antenna trajectory radius in cm
    AntennaRadius,
    /// `ant_z`: antenna height in cm
    AntennaHeight,
    /// `fib_ang`: fibroglandular shell rotation angle
    FibroglandularAngle,
    /// `adi_x`: adipose shell x offset
    AdiposeX,
    /// `adi_y`: adipose shell y offset
    AdiposeY,
    /// `fib_ref_id`: id of the fibroglandular reference scan
    FibroglandularRefId,
    /// `fib_x`: fibroglandular shell x offset
    FibroglandularX,
    /// `fib_y`: fibroglandular shell y offset
    FibroglandularY,
    /// `tum_in_fib`: 1 if the tumour sits inside the fibroglandular shell
    TumorInFibroglandular,
}

impl ScanField {
    /// Every schema field, in canonical column order
    pub const ALL: [ScanField; 24] = [
        ScanField::ExperimentIndex,
        ScanField::Id,
        ScanField::PhantomId,
        ScanField::TumorRadius,
        ScanField::TumorShape,
        ScanField::TumorX,
        ScanField::TumorY,
        ScanField::TumorZ,
        ScanField::Birads,
        ScanField::AdiposeVolume,
        ScanField::FibroglandularVolume,
        ScanField::AdiposeRefId,
        ScanField::EmptyRefId,
        ScanField::Date,
        ScanField::SessionIndex,
        ScanField::AntennaRadius,
        ScanField::AntennaHeight,
        ScanField::FibroglandularAngle,
        ScanField::AdiposeX,
        ScanField::AdiposeY,
        ScanField::FibroglandularRefId,
        ScanField::FibroglandularX,
        ScanField::FibroglandularY,
        ScanField::TumorInFibroglandular,
    ];

    /// Column header used in the metadata files
    pub fn name(&self) -> &'static str {
        match self {
            ScanField::ExperimentIndex => "n_expt",
            ScanField::Id => "id",
            ScanField::PhantomId => "phant_id",
            ScanField::TumorRadius => "tum_rad",
            ScanField::TumorShape => "tum_shape",
            ScanField::TumorX => "tum_x",
            ScanField::TumorY => "tum_y",
            ScanField::TumorZ => "tum_z",
            ScanField::Birads => "birads",
            ScanField::AdiposeVolume => "adi_vol",
            ScanField::FibroglandularVolume => "fib_vol",
            ScanField::AdiposeRefId => "adi_ref_id",
            ScanField::EmptyRefId => "emp_ref_id",
            ScanField::Date => "date",
            ScanField::SessionIndex => "n_session",
            ScanField::AntennaRadius => "ant_rad",
            ScanField::AntennaHeight => "ant_z",
            ScanField::FibroglandularAngle => "fib_ang",
            ScanField::AdiposeX => "adi_x",
            ScanField::AdiposeY => "adi_y",
            ScanField::FibroglandularRefId => "fib_ref_id",
            ScanField::FibroglandularX => "fib_x",
            ScanField::FibroglandularY => "fib_y",
            ScanField::TumorInFibroglandular => "tum_in_fib",
        }
    }

    /// Declared type of this field
    pub fn field_type(&self) -> FieldType {
        match self {
            ScanField::ExperimentIndex
            | ScanField::Id
            | ScanField::Birads
            | ScanField::AdiposeRefId
            | ScanField::EmptyRefId
            | ScanField::SessionIndex
            | ScanField::FibroglandularRefId
            | ScanField::TumorInFibroglandular => FieldType::Integer,
            ScanField::PhantomId | ScanField::TumorShape | ScanField::Date => FieldType::Text,
            _ => FieldType::Real,
        }
    }

    /// Look a field up by its column header
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for ScanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed cell value, as returned by [`ScanRecord::value`](super::ScanRecord::value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Integer field, `None` when the cell was empty
    Integer(Option<i64>),
    /// Real field, `None` when the cell was empty
    Real(Option<f64>),
    /// Text field, empty when the cell was empty
    Text(String),
}

impl FieldValue {
    /// Whether this value is the missing sentinel for its type
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Integer(v) => v.is_none(),
            FieldValue::Real(v) => v.is_none(),
            FieldValue::Text(s) => s.is_empty(),
        }
    }

    /// Numeric view of the value (integers widened to `f64`)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => v.map(|i| i as f64),
            FieldValue::Real(v) => *v,
            FieldValue::Text(_) => None,
        }
    }
}

/// Check that the compiled-in schema is well formed.
///
/// Called once before any catalog is parsed; it guards against edits that
/// would give two fields the same column name.
pub fn validate_schema() -> Result<(), MetadataError> {
    let mut seen = HashSet::with_capacity(ScanField::ALL.len());
    for field in ScanField::ALL {
        if field.name().is_empty() {
            return Err(MetadataError::InvalidSchema(format!(
                "field {:?} has an empty column name",
                field
            )));
        }
        if !seen.insert(field.name()) {
            return Err(MetadataError::InvalidSchema(format!(
                "column name '{}' is declared twice",
                field.name()
            )));
        }
    }
    Ok(())
}
