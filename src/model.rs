use chrono::NaiveDate;

/// Identifier of the authenticated caller.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored booking row, owner included.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub id: String,
    pub ship_id: String,
    pub renter_id: String,
    pub total_price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The projection returned to the renter. `renter_id` is a filter only and is
/// never part of it.
#[derive(sqlx::FromRow, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub ship_id: String,
    pub total_price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&BookingRecord> for Booking {
    fn from(record: &BookingRecord) -> Self {
        Booking {
            id: record.id.clone(),
            ship_id: record.ship_id.clone(),
            total_price: record.total_price,
            start_date: record.start_date,
            end_date: record.end_date,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BookingData {
    pub booking: Booking,
}
