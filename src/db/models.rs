use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted row of `train_position`. Every row written from the same
/// snapshot carries the same `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct TrainPositionRow {
    pub timestamp: i64,
    pub lat: f64,
    pub lon: f64,
    pub relation: String,
    pub train_number: String,
    pub menetvonal: String,
    pub elvira_id: String,
}
