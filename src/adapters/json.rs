use serde::Serialize;
use serde_json::{Map, Value};
use std::{fs, io, path::Path};
use thiserror::Error;
use vetgeo_core::entities::{AddressRecord, MapPoint};

const LAT_FIELD: &str = "lat";
const LNG_FIELD: &str = "lng";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected an array of records")]
    NotAnArray,
    #[error("Record #{index} is not an object")]
    NotAnObject { index: usize },
}

/// A record as it is stored in the JSON file.
///
/// All fields are kept in their original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonRecord(Map<String, Value>);

impl JsonRecord {
    fn coordinate(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    pub fn to_address_record(&self, address_field: &str) -> AddressRecord {
        let address = self
            .0
            .get(address_field)
            .and_then(Value::as_str)
            .map(ToString::to_string);
        let pos = MapPoint::from_optional_lat_lng(
            self.coordinate(LAT_FIELD),
            self.coordinate(LNG_FIELD),
        );
        AddressRecord { address, pos }
    }

    /// Overwrite both coordinate fields, `null` if there is no position.
    ///
    /// Fields that already hold the same coordinates are left untouched.
    pub fn set_pos(&mut self, pos: Option<MapPoint>) {
        let (lat, lng) = match pos {
            Some(pos) => {
                if self.coordinate(LAT_FIELD) == Some(pos.lat())
                    && self.coordinate(LNG_FIELD) == Some(pos.lng())
                {
                    return;
                }
                (Value::from(pos.lat()), Value::from(pos.lng()))
            }
            None => (Value::Null, Value::Null),
        };
        self.0.insert(LAT_FIELD.to_string(), lat);
        self.0.insert(LNG_FIELD.to_string(), lng);
    }
}

pub fn parse_records(json: &str) -> Result<Vec<JsonRecord>, LoadError> {
    let Value::Array(values) = serde_json::from_str::<Value>(json)? else {
        return Err(LoadError::NotAnArray);
    };
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(fields) => Ok(JsonRecord(fields)),
            _ => Err(LoadError::NotAnObject { index }),
        })
        .collect()
}

pub fn read_records_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonRecord>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_records(&json)
}

pub fn records_to_string(records: &[JsonRecord]) -> serde_json::Result<String> {
    // Two spaces indentation, non-ASCII characters are written as they are
    serde_json::to_string_pretty(records)
}

pub fn write_records_to_file<P: AsRef<Path>>(path: P, records: &[JsonRecord]) -> io::Result<()> {
    let json = records_to_string(records)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_address_and_position() {
        let records = parse_records(
            r#"[
              {"Address": "20/5 Main St, Springfield", "Name": "Vet"},
              {"Address": "5 Oak Ave", "lat": 10.0, "lng": 20.0},
              {"Address": null, "lat": 1.0, "lng": null},
              {"Address": 42, "lat": "1.0", "lng": "2.0"},
              {}
            ]"#,
        )
        .unwrap();
        let records: Vec<_> = records
            .iter()
            .map(|r| r.to_address_record("Address"))
            .collect();
        assert_eq!(
            Some("20/5 Main St, Springfield"),
            records[0].address.as_deref()
        );
        assert!(records[0].pos.is_none());
        assert_eq!((Some(10.0), Some(20.0)), records[1].lat_lng());
        assert_eq!(AddressRecord::default(), records[2]);
        assert_eq!(AddressRecord::default(), records[3]);
        assert_eq!(AddressRecord::default(), records[4]);
    }

    #[test]
    fn read_integer_coordinates() {
        let records = parse_records(r#"[{"lat": 10, "lng": -3}]"#).unwrap();
        assert_eq!(
            (Some(10.0), Some(-3.0)),
            records[0].to_address_record("Address").lat_lng()
        );
    }

    #[test]
    fn custom_address_field() {
        let records = parse_records(r#"[{"address": "1 A St", "Address": "2 B St"}]"#).unwrap();
        let record = records[0].to_address_record("address");
        assert_eq!(Some("1 A St"), record.address.as_deref());
    }

    #[test]
    fn reject_malformed_input() {
        assert!(matches!(parse_records("{"), Err(LoadError::Json(_))));
        assert!(matches!(
            parse_records(r#"{"Address": "1 A St"}"#),
            Err(LoadError::NotAnArray)
        ));
        assert!(matches!(
            parse_records(r#"[{"Address": "1 A St"}, "2 B St"]"#),
            Err(LoadError::NotAnObject { index: 1 })
        ));
    }

    #[test]
    fn write_both_coordinates() {
        let mut records =
            parse_records(r#"[{"Address": "x", "lat": 5.0}, {"lng": 1.0, "Address": "y"}]"#)
                .unwrap();
        records[0].set_pos(Some(MapPoint::from_lat_lng_deg(1.0, 2.0)));
        records[1].set_pos(None);
        let json = records_to_string(&records).unwrap();
        assert_eq!(
            r#"[
  {
    "Address": "x",
    "lat": 1.0,
    "lng": 2.0
  },
  {
    "lng": null,
    "Address": "y",
    "lat": null
  }
]"#,
            json
        );
    }

    #[test]
    fn keep_unchanged_coordinates_as_they_are() {
        let mut records = parse_records(r#"[{"lat": 10, "lng": 20}]"#).unwrap();
        let pos = records[0].to_address_record("Address").pos;
        records[0].set_pos(pos);
        assert_eq!(r#"[{"lat":10,"lng":20}]"#, serde_json::to_string(&records).unwrap());
    }

    #[test]
    fn keep_non_ascii_characters() {
        let records = parse_records(r#"[{"Address": "Rynek Główny 1, Kraków"}]"#).unwrap();
        let json = records_to_string(&records).unwrap();
        assert!(json.contains("Rynek Główny 1, Kraków"));
    }
}
