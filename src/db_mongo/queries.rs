use anyhow::{Context, Result};
use mongodb::{Database, bson::{doc, oid::ObjectId}};
use super::models::CrewRecord;

const CREW_COLLECTION: &str = "Crew";

pub async fn insert_crew_member(db: &Database, record: CrewRecord) -> Result<CrewRecord> {
    let collection = db.collection::<CrewRecord>(CREW_COLLECTION);

    let result = collection.insert_one(&record).await?;
    let mut record = record;
    record.id = Some(
        result
            .inserted_id
            .as_object_id()
            .context("Insert did not return an ObjectId")?,
    );

    Ok(record)
}

pub async fn list_crew_members(db: &Database) -> Result<Vec<CrewRecord>> {
    let collection = db.collection::<CrewRecord>(CREW_COLLECTION);

    let mut cursor = collection.find(doc! {}).await?;

    let mut records = Vec::new();
    while cursor.advance().await? {
        records.push(cursor.deserialize_current()?);
    }

    Ok(records)
}

/// Replace the full document matching `id`. Returns the matched count so the
/// caller can distinguish not-found from success. The replacement is
/// serialized without an `_id`, so the store keeps the existing identifier.
pub async fn replace_crew_member(
    db: &Database,
    id: ObjectId,
    record: &CrewRecord,
) -> Result<u64> {
    let collection = db.collection::<CrewRecord>(CREW_COLLECTION);

    let result = collection.replace_one(doc! { "_id": id }, record).await?;

    Ok(result.matched_count)
}

/// Delete the single document matching `id`. Returns the deleted count.
pub async fn delete_crew_member(db: &Database, id: ObjectId) -> Result<u64> {
    let collection = db.collection::<CrewRecord>(CREW_COLLECTION);

    let result = collection.delete_one(doc! { "_id": id }).await?;

    Ok(result.deleted_count)
}
