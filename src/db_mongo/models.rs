use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;

/// A crew member as persisted in the `Crew` collection. The identifier is
/// assigned by the store on insert and is absent until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "CrewID")]
    pub crew_id: String,
}

impl CrewRecord {
    pub fn new(name: String, rank: String, crew_id: String) -> Self {
        Self {
            id: None,
            name,
            rank,
            crew_id,
        }
    }
}
