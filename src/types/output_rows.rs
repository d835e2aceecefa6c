use serde::Serialize;
use serde_json::Value;

use super::datamall_record::{field_or, field_text, Record, NOT_AVAILABLE};

/// `[speedBand, "startLon startLat", "endLon endLat"]`
#[derive(Serialize, Debug, PartialEq)]
pub struct SpeedBandRow(pub Value, pub String, pub String);

/// `[agency, availableLots, development, "lat lon"]`
#[derive(Serialize, Debug, PartialEq)]
pub struct CarParkRow(pub Value, pub Value, pub Value, pub String);

/// `[type, longitude, latitude, message]`
///
/// Longitude comes before latitude here, the reverse of [`CarParkRow`].
/// Existing clients read it in this order.
#[derive(Serialize, Debug, PartialEq)]
pub struct TrafficIncidentRow(pub Value, pub Value, pub Value, pub Value);

impl SpeedBandRow {
    pub fn from_record(record: &Record) -> Self {
        SpeedBandRow(
            field_or(record, "SpeedBand", NOT_AVAILABLE),
            format!(
                "{} {}",
                field_text(record, "StartLon"),
                field_text(record, "StartLat")
            ),
            format!(
                "{} {}",
                field_text(record, "EndLon"),
                field_text(record, "EndLat")
            ),
        )
    }
}

impl CarParkRow {
    pub fn from_record(record: &Record) -> Self {
        CarParkRow(
            field_or(record, "Agency", NOT_AVAILABLE),
            field_or(record, "AvailableLots", NOT_AVAILABLE),
            field_or(record, "Development", NOT_AVAILABLE),
            lat_lon(record.get("Location")),
        )
    }
}

impl TrafficIncidentRow {
    pub fn from_record(record: &Record) -> Self {
        TrafficIncidentRow(
            field_or(record, "Type", NOT_AVAILABLE),
            field_or(record, "Longitude", NOT_AVAILABLE),
            field_or(record, "Latitude", NOT_AVAILABLE),
            field_or(record, "Message", "No message"),
        )
    }
}

// DataMall sends car park locations as "<lat> <lon>".
fn lat_lon(location: Option<&Value>) -> String {
    if let Some(Value::String(location)) = location {
        let parts: Vec<&str> = location.split_whitespace().collect();
        if let [lat, lon] = parts.as_slice() {
            return format!("{} {}", lat, lon);
        }
    }

    format!("{} {}", NOT_AVAILABLE, NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn speed_band_row_with_all_fields() {
        let row = SpeedBandRow::from_record(&record(json!({
            "LinkID": "103000000",
            "SpeedBand": 2,
            "StartLon": "103.86246",
            "StartLat": "1.30139",
            "EndLon": "103.86231",
            "EndLat": "1.30079"
        })));

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!([2, "103.86246 1.30139", "103.86231 1.30079"])
        );
    }

    #[test]
    fn speed_band_row_defaults_missing_fields() {
        let row = SpeedBandRow::from_record(&record(json!({ "StartLon": "103.8" })));

        assert_eq!(
            row,
            SpeedBandRow(json!("N/A"), "103.8 N/A".to_string(), "N/A N/A".to_string())
        );
    }

    #[test]
    fn car_park_location_two_tokens() {
        let row = CarParkRow::from_record(&record(json!({
            "Agency": "HDB",
            "AvailableLots": 42,
            "Development": "BLK 1",
            "Location": "1.234 103.456"
        })));

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!(["HDB", 42, "BLK 1", "1.234 103.456"])
        );
    }

    #[test]
    fn car_park_location_extra_whitespace_is_normalised() {
        let row = CarParkRow::from_record(&record(json!({ "Location": "  1.234\t103.456 " })));

        assert_eq!(row.3, "1.234 103.456");
    }

    #[test]
    fn car_park_location_bad_format() {
        for location in [json!("bad-format"), json!("1 2 3"), json!(""), json!(1.5)] {
            let row = CarParkRow::from_record(&record(json!({ "Location": location })));
            assert_eq!(row.3, "N/A N/A");
        }
    }

    #[test]
    fn car_park_location_missing() {
        let row = CarParkRow::from_record(&record(json!({ "Agency": "LTA" })));

        assert_eq!(
            row,
            CarParkRow(
                json!("LTA"),
                json!("N/A"),
                json!("N/A"),
                "N/A N/A".to_string()
            )
        );
    }

    #[test]
    fn incident_row_puts_longitude_first() {
        let row = TrafficIncidentRow::from_record(&record(json!({
            "Type": "Accident",
            "Latitude": 1.31,
            "Longitude": 103.9,
            "Message": "(15/10)08:01 Accident on PIE."
        })));

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!(["Accident", 103.9, 1.31, "(15/10)08:01 Accident on PIE."])
        );
    }

    #[test]
    fn incident_row_without_message() {
        let row = TrafficIncidentRow::from_record(&record(json!({ "Type": "Roadwork" })));

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!(["Roadwork", "N/A", "N/A", "No message"])
        );
    }
}
