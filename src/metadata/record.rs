use std::path::Path;

use serde::{Deserialize, Serialize};

use super::schema::{FieldType, FieldValue, ScanField};
use super::MetadataError;
use crate::antenna::phase_delay_radius;

/// Metadata of one physical scan, one row of a session metadata file.
///
/// Absent numeric cells are `None`; absent text cells are empty strings.
/// Records are created by the catalog and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Experiment index within the session, matched against scan filenames
    #[serde(rename = "n_expt")]
    pub experiment_index: Option<i64>,

    /// Dataset-wide unique scan identifier
    pub id: Option<i64>,

    /// Phantom identifier; the first two characters name the adipose shell
    #[serde(rename = "phant_id")]
    pub phantom_id: String,

    /// Tumour radius in cm, `None` for tumour-free scans
    #[serde(rename = "tum_rad")]
    pub tumor_radius: Option<f64>,

    /// Tumour shape descriptor
    #[serde(rename = "tum_shape")]
    pub tumor_shape: String,

    /// Tumour x position in cm
    #[serde(rename = "tum_x")]
    pub tumor_x: Option<f64>,

    /// Tumour y position in cm
    #[serde(rename = "tum_y")]
    pub tumor_y: Option<f64>,

    /// Tumour z position in cm
    #[serde(rename = "tum_z")]
    pub tumor_z: Option<f64>,

    /// BI-RADS breast density class (1-4)
    pub birads: Option<i64>,

    /// Adipose shell volume
    #[serde(rename = "adi_vol")]
    pub adipose_volume: Option<f64>,

    /// Fibroglandular shell volume
    #[serde(rename = "fib_vol")]
    pub fibroglandular_volume: Option<f64>,

    /// Id of the adipose-only reference scan
    #[serde(rename = "adi_ref_id")]
    pub adipose_ref_id: Option<i64>,

    /// Id of the empty-chamber reference scan
    #[serde(rename = "emp_ref_id")]
    pub empty_ref_id: Option<i64>,

    /// Session date
    pub date: String,

    /// Session index
    #[serde(rename = "n_session")]
    pub session_index: Option<i64>,

    /// Antenna trajectory radius in cm, measured at the SMA connector
    #[serde(rename = "ant_rad")]
    pub antenna_radius: Option<f64>,

    /// Antenna height in cm
    #[serde(rename = "ant_z")]
    pub antenna_height: Option<f64>,

    /// Fibroglandular shell rotation angle
    #[serde(rename = "fib_ang")]
    pub fibroglandular_angle: Option<f64>,

    /// Adipose shell x offset
    #[serde(rename = "adi_x")]
    pub adipose_x: Option<f64>,

    /// Adipose shell y offset
    #[serde(rename = "adi_y")]
    pub adipose_y: Option<f64>,

    /// Id of the fibroglandular reference scan
    #[serde(rename = "fib_ref_id")]
    pub fibroglandular_ref_id: Option<i64>,

    /// Fibroglandular shell x offset
    #[serde(rename = "fib_x")]
    pub fibroglandular_x: Option<f64>,

    /// Fibroglandular shell y offset
    #[serde(rename = "fib_y")]
    pub fibroglandular_y: Option<f64>,

    /// 1 if the tumour sits inside the fibroglandular shell
    #[serde(rename = "tum_in_fib")]
    pub tumor_in_fibroglandular: Option<i64>,
}

impl ScanRecord {
    /// Create an empty record (every field missing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed value of a schema field
    pub fn value(&self, field: ScanField) -> FieldValue {
        use FieldValue::{Integer, Real, Text};
        match field {
            ScanField::ExperimentIndex => Integer(self.experiment_index),
            ScanField::Id => Integer(self.id),
            ScanField::PhantomId => Text(self.phantom_id.clone()),
            ScanField::TumorRadius => Real(self.tumor_radius),
            ScanField::TumorShape => Text(self.tumor_shape.clone()),
            ScanField::TumorX => Real(self.tumor_x),
            ScanField::TumorY => Real(self.tumor_y),
            ScanField::TumorZ => Real(self.tumor_z),
            ScanField::Birads => Integer(self.birads),
            ScanField::AdiposeVolume => Real(self.adipose_volume),
            ScanField::FibroglandularVolume => Real(self.fibroglandular_volume),
            ScanField::AdiposeRefId => Integer(self.adipose_ref_id),
            ScanField::EmptyRefId => Integer(self.empty_ref_id),
            ScanField::Date => Text(self.date.clone()),
            ScanField::SessionIndex => Integer(self.session_index),
            ScanField::AntennaRadius => Real(self.antenna_radius),
            ScanField::AntennaHeight => Real(self.antenna_height),
            ScanField::FibroglandularAngle => Real(self.fibroglandular_angle),
            ScanField::AdiposeX => Real(self.adipose_x),
            ScanField::AdiposeY => Real(self.adipose_y),
            ScanField::FibroglandularRefId => Integer(self.fibroglandular_ref_id),
            ScanField::FibroglandularX => Real(self.fibroglandular_x),
            ScanField::FibroglandularY => Real(self.fibroglandular_y),
            ScanField::TumorInFibroglandular => Integer(self.tumor_in_fibroglandular),
        }
    }

    /// Parse `raw` with the field's coercion and store it.
    ///
    /// `raw` is trimmed first; an empty cell stores the missing sentinel.
    /// `source` is only used to label errors.
    pub fn set(&mut self, field: ScanField, raw: &str, source: &Path) -> Result<(), MetadataError> {
        let raw = raw.trim();
        let value = match field.field_type() {
            FieldType::Integer => FieldValue::Integer(parse_cell(field, raw, source)?),
            // A literal "nan" cell means the same thing as an empty one
            FieldType::Real => {
                FieldValue::Real(parse_cell::<f64>(field, raw, source)?.filter(|v| !v.is_nan()))
            }
            FieldType::Text => FieldValue::Text(raw.to_string()),
        };

        match (field, value) {
            (ScanField::ExperimentIndex, FieldValue::Integer(v)) => self.experiment_index = v,
            (ScanField::Id, FieldValue::Integer(v)) => self.id = v,
            (ScanField::PhantomId, FieldValue::Text(v)) => self.phantom_id = v,
            (ScanField::TumorRadius, FieldValue::Real(v)) => self.tumor_radius = v,
            (ScanField::TumorShape, FieldValue::Text(v)) => self.tumor_shape = v,
            (ScanField::TumorX, FieldValue::Real(v)) => self.tumor_x = v,
            (ScanField::TumorY, FieldValue::Real(v)) => self.tumor_y = v,
            (ScanField::TumorZ, FieldValue::Real(v)) => self.tumor_z = v,
            (ScanField::Birads, FieldValue::Integer(v)) => self.birads = v,
            (ScanField::AdiposeVolume, FieldValue::Real(v)) => self.adipose_volume = v,
            (ScanField::FibroglandularVolume, FieldValue::Real(v)) => {
                self.fibroglandular_volume = v
            }
            (ScanField::AdiposeRefId, FieldValue::Integer(v)) => self.adipose_ref_id = v,
            (ScanField::EmptyRefId, FieldValue::Integer(v)) => self.empty_ref_id = v,
            (ScanField::Date, FieldValue::Text(v)) => self.date = v,
            (ScanField::SessionIndex, FieldValue::Integer(v)) => self.session_index = v,
            (ScanField::AntennaRadius, FieldValue::Real(v)) => self.antenna_radius = v,
            (ScanField::AntennaHeight, FieldValue::Real(v)) => self.antenna_height = v,
            (ScanField::FibroglandularAngle, FieldValue::Real(v)) => self.fibroglandular_angle = v,
            (ScanField::AdiposeX, FieldValue::Real(v)) => self.adipose_x = v,
            (ScanField::AdiposeY, FieldValue::Real(v)) => self.adipose_y = v,
            (ScanField::FibroglandularRefId, FieldValue::Integer(v)) => {
                self.fibroglandular_ref_id = v
            }
            (ScanField::FibroglandularX, FieldValue::Real(v)) => self.fibroglandular_x = v,
            (ScanField::FibroglandularY, FieldValue::Real(v)) => self.fibroglandular_y = v,
            (ScanField::TumorInFibroglandular, FieldValue::Integer(v)) => {
                self.tumor_in_fibroglandular = v
            }
            (field, value) => {
                return Err(MetadataError::InvalidSchema(format!(
                    "field '{}' declared {} but produced {:?}",
                    field,
                    field.field_type(),
                    value
                )))
            }
        }
        Ok(())
    }

    /// Whether the scanned phantom contained a tumour
    pub fn has_tumor(&self) -> bool {
        self.tumor_radius.is_some()
    }

    /// Binary class label: 1 for tumour-containing scans, 0 otherwise
    pub fn class_label(&self) -> u8 {
        u8::from(self.has_tumor())
    }

    /// Adipose shell id, the first two characters of the phantom id (e.g. `A2`)
    pub fn adipose_shell_id(&self) -> &str {
        match self.phantom_id.char_indices().nth(2) {
            Some((end, _)) => &self.phantom_id[..end],
            None => &self.phantom_id,
        }
    }

    /// Whether the phantom includes a fibroglandular shell (`F` in the phantom id)
    pub fn has_fibroglandular(&self) -> bool {
        self.phantom_id.contains('F')
    }

    /// Antenna trajectory radius corrected for the antenna phase delay
    pub fn adjusted_antenna_radius(&self) -> Option<f64> {
        self.antenna_radius.map(phase_delay_radius)
    }
}

fn parse_cell<T: std::str::FromStr>(
    field: ScanField,
    raw: &str,
    source: &Path,
) -> Result<Option<T>, MetadataError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| MetadataError::TypeCoercion {
            field: field.name().to_string(),
            value: raw.to_string(),
            expected: field.field_type().as_str(),
            path: source.to_path_buf(),
        })
}
