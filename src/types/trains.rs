use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the provider's `@CreationTime` field, e.g. `2024.01.15 10:30:00`.
/// The string carries no zone; it is interpreted as UTC.
pub const CREATION_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Request body for the map endpoint. `a` selects the dataset,
/// `jo` narrows it to the live, unfiltered train list.
#[derive(Debug, Clone, Serialize)]
pub struct TrainsQuery {
    pub a: &'static str,
    pub jo: QueryOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryOptions {
    pub history: bool,
    pub id: bool,
}

impl TrainsQuery {
    /// The one query this tool ever sends: current positions, no history,
    /// no id filter.
    pub fn latest() -> Self {
        Self {
            a: "TRAINS",
            jo: QueryOptions {
                history: false,
                id: false,
            },
        }
    }
}

/// Outer envelope the provider wraps every response in.
#[derive(Debug, Deserialize)]
pub struct ProviderEnvelope {
    pub d: ProviderResult,
}

#[derive(Debug, Deserialize)]
pub struct ProviderResult {
    pub result: Snapshot,
}

impl ProviderEnvelope {
    pub fn into_snapshot(self) -> Snapshot {
        self.d.result
    }
}

/// One fetched response: every tracked train at a single provider-reported
/// instant.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "@CreationTime")]
    pub creation_time: String,
    #[serde(rename = "Trains")]
    pub trains: TrainList,
}

#[derive(Debug, Deserialize)]
pub struct TrainList {
    #[serde(rename = "Train")]
    pub train: Vec<TrainRecord>,
}

/// One train's reported position and metadata. Field names mirror the
/// provider's `@`-prefixed wire names; `delay` and `line` exist only on the
/// wire and never reach the database.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainRecord {
    #[serde(rename = "@Delay")]
    pub delay: i64,
    #[serde(rename = "@Lat")]
    pub lat: f64,
    #[serde(rename = "@Lon")]
    pub lon: f64,
    #[serde(rename = "@Relation")]
    pub relation: String,
    #[serde(rename = "@Line")]
    pub line: String,
    #[serde(rename = "@TrainNumber")]
    pub train_number: String,
    #[serde(rename = "@ElviraID")]
    pub elvira_id: String,
    #[serde(rename = "@Menetvonal")]
    pub menetvonal: String,
}

impl Snapshot {
    /// Unix seconds of the snapshot's creation time. Shared by every row
    /// persisted from this snapshot.
    pub fn created_at(&self) -> Result<i64, chrono::ParseError> {
        let dt = NaiveDateTime::parse_from_str(&self.creation_time, CREATION_TIME_FORMAT)?;
        Ok(dt.and_utc().timestamp())
    }

    pub fn len(&self) -> usize {
        self.trains.train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.train.is_empty()
    }
}

/// Parse raw provider JSON bytes into a `Snapshot`, peeling the envelope.
pub fn decode_snapshot(body: &[u8]) -> Result<Snapshot, serde_json::Error> {
    let envelope: ProviderEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.into_snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"d":{"result":{"@CreationTime":"2024.01.15 10:30:00","Trains":{"Train":[{"@Delay":5,"@Lat":47.5,"@Lon":19.1,"@Relation":"Budapest-Szeged","@Line":"120","@TrainNumber":"123","@ElviraID":"E1","@Menetvonal":"M1"}]}}}}"#;

    #[test]
    fn decodes_the_provider_envelope() {
        let snapshot = decode_snapshot(SAMPLE.as_bytes()).expect("sample body decodes");
        assert_eq!(snapshot.creation_time, "2024.01.15 10:30:00");
        assert_eq!(snapshot.len(), 1);

        let train = &snapshot.trains.train[0];
        assert_eq!(train.delay, 5);
        assert_eq!(train.lat, 47.5);
        assert_eq!(train.lon, 19.1);
        assert_eq!(train.relation, "Budapest-Szeged");
        assert_eq!(train.line, "120");
        assert_eq!(train.train_number, "123");
        assert_eq!(train.elvira_id, "E1");
        assert_eq!(train.menetvonal, "M1");
    }

    #[test]
    fn creation_time_converts_to_unix_seconds() {
        let snapshot = decode_snapshot(SAMPLE.as_bytes()).expect("sample body decodes");
        assert_eq!(snapshot.created_at().expect("timestamp parses"), 1705314600);
    }

    #[test]
    fn unparsable_creation_time_is_an_error() {
        let snapshot = Snapshot {
            creation_time: "2024-01-15T10:30:00Z".to_string(),
            trains: TrainList { train: Vec::new() },
        };
        assert!(snapshot.created_at().is_err());
    }

    #[test]
    fn query_body_matches_the_wire_contract() {
        let body = serde_json::to_string(&TrainsQuery::latest()).expect("query serializes");
        assert_eq!(body, r#"{"a":"TRAINS","jo":{"history":false,"id":false}}"#);
    }

    #[test]
    fn empty_train_list_decodes() {
        let body = r#"{"d":{"result":{"@CreationTime":"2024.01.15 10:30:00","Trains":{"Train":[]}}}}"#;
        let snapshot = decode_snapshot(body.as_bytes()).expect("empty list decodes");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn missing_creation_time_fails_to_decode() {
        let body = r#"{"d":{"result":{"Trains":{"Train":[]}}}}"#;
        assert!(decode_snapshot(body.as_bytes()).is_err());
    }
}
