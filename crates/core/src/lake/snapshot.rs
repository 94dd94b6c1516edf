//! Parquet encoding for raw expense snapshots.
//!
//! The snapshot preserves expenses exactly as extracted, before any
//! transform, so the lake always holds a replayable copy of the source
//! rows. Schema changes must stay backwards-compatible.

use std::io::Cursor;
use std::sync::Arc;

use arrow::array::{BooleanArray, Date32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use chrono::Datelike;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use parquet::format::KeyValue;

use super::error::LakeError;
use crate::records::ExpenseRecord;

/// `num_days_from_ce()` of 1970-01-01, for Date32 conversion.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("organization_id", DataType::Utf8, false),
        Field::new("user_id", DataType::Utf8, false),
        Field::new("description", DataType::Utf8, true),
        Field::new("amount", DataType::Utf8, true),
        Field::new("currency", DataType::Utf8, false),
        Field::new("category", DataType::Utf8, true),
        Field::new("subcategory", DataType::Utf8, true),
        Field::new("vendor", DataType::Utf8, true),
        Field::new("date", DataType::Date32, false),
        Field::new("created_at", DataType::Int64, false),
        Field::new("updated_at", DataType::Int64, false),
        Field::new("status", DataType::Utf8, false),
        Field::new("billable", DataType::Boolean, false),
        Field::new("receipt_url", DataType::Utf8, true),
        Field::new("tags", DataType::Utf8, true),
        Field::new("notes", DataType::Utf8, true),
        Field::new("first_name", DataType::Utf8, true),
        Field::new("last_name", DataType::Utf8, true),
        Field::new("email", DataType::Utf8, true),
        Field::new("organization_name", DataType::Utf8, true),
        Field::new("industry", DataType::Utf8, true),
        Field::new("size", DataType::Utf8, true),
    ]))
}

fn writer_properties() -> WriterProperties {
    let created_by = KeyValue {
        key: "created_by".to_string(),
        value: Some("spendlake".to_string()),
    };
    WriterProperties::builder()
        .set_key_value_metadata(Some(vec![created_by]))
        .build()
}

fn write_single_batch(schema: Arc<Schema>, batch: &RecordBatch) -> Result<Bytes, LakeError> {
    let mut cursor = Cursor::new(Vec::<u8>::new());
    let mut writer = ArrowWriter::try_new(&mut cursor, schema, Some(writer_properties()))?;
    writer.write(batch)?;
    writer.close()?;
    Ok(Bytes::from(cursor.into_inner()))
}

/// Encodes raw expense rows into a single-batch Parquet buffer.
///
/// Amounts stay as the raw text extracted from the source and dates are
/// stored as Date32, timestamps as epoch milliseconds.
///
/// # Errors
///
/// Returns [`LakeError::Encode`] if batch construction or Parquet
/// serialization fails.
pub fn encode_expenses(rows: &[ExpenseRecord]) -> Result<Bytes, LakeError> {
    let schema = snapshot_schema();

    let ids = StringArray::from(rows.iter().map(|r| r.id.to_string()).collect::<Vec<_>>());
    let organization_ids = StringArray::from(
        rows.iter()
            .map(|r| r.organization_id.to_string())
            .collect::<Vec<_>>(),
    );
    let user_ids = StringArray::from(
        rows.iter()
            .map(|r| r.user_id.to_string())
            .collect::<Vec<_>>(),
    );
    let descriptions = StringArray::from(
        rows.iter()
            .map(|r| r.description.as_deref())
            .collect::<Vec<_>>(),
    );
    let amounts = StringArray::from(rows.iter().map(|r| r.amount.as_deref()).collect::<Vec<_>>());
    let currencies = StringArray::from(
        rows.iter()
            .map(|r| Some(r.currency.as_str()))
            .collect::<Vec<_>>(),
    );
    let categories = StringArray::from(
        rows.iter()
            .map(|r| r.category.as_deref())
            .collect::<Vec<_>>(),
    );
    let subcategories = StringArray::from(
        rows.iter()
            .map(|r| r.subcategory.as_deref())
            .collect::<Vec<_>>(),
    );
    let vendors = StringArray::from(rows.iter().map(|r| r.vendor.as_deref()).collect::<Vec<_>>());
    let dates = Date32Array::from(
        rows.iter()
            .map(|r| r.date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
            .collect::<Vec<_>>(),
    );
    let created_at = Int64Array::from(
        rows.iter()
            .map(|r| r.created_at.timestamp_millis())
            .collect::<Vec<_>>(),
    );
    let updated_at = Int64Array::from(
        rows.iter()
            .map(|r| r.updated_at.timestamp_millis())
            .collect::<Vec<_>>(),
    );
    let statuses = StringArray::from(
        rows.iter()
            .map(|r| Some(r.status.as_str()))
            .collect::<Vec<_>>(),
    );
    let billable = BooleanArray::from(rows.iter().map(|r| r.billable).collect::<Vec<_>>());
    let receipt_urls = StringArray::from(
        rows.iter()
            .map(|r| r.receipt_url.as_deref())
            .collect::<Vec<_>>(),
    );
    let tags = StringArray::from(rows.iter().map(|r| r.tags.as_deref()).collect::<Vec<_>>());
    let notes = StringArray::from(rows.iter().map(|r| r.notes.as_deref()).collect::<Vec<_>>());
    let first_names = StringArray::from(
        rows.iter()
            .map(|r| r.first_name.as_deref())
            .collect::<Vec<_>>(),
    );
    let last_names = StringArray::from(
        rows.iter()
            .map(|r| r.last_name.as_deref())
            .collect::<Vec<_>>(),
    );
    let emails = StringArray::from(rows.iter().map(|r| r.email.as_deref()).collect::<Vec<_>>());
    let organization_names = StringArray::from(
        rows.iter()
            .map(|r| r.organization_name.as_deref())
            .collect::<Vec<_>>(),
    );
    let industries = StringArray::from(
        rows.iter()
            .map(|r| r.industry.as_deref())
            .collect::<Vec<_>>(),
    );
    let sizes = StringArray::from(rows.iter().map(|r| r.size.as_deref()).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(ids),
            Arc::new(organization_ids),
            Arc::new(user_ids),
            Arc::new(descriptions),
            Arc::new(amounts),
            Arc::new(currencies),
            Arc::new(categories),
            Arc::new(subcategories),
            Arc::new(vendors),
            Arc::new(dates),
            Arc::new(created_at),
            Arc::new(updated_at),
            Arc::new(statuses),
            Arc::new(billable),
            Arc::new(receipt_urls),
            Arc::new(tags),
            Arc::new(notes),
            Arc::new(first_names),
            Arc::new(last_names),
            Arc::new(emails),
            Arc::new(organization_names),
            Arc::new(industries),
            Arc::new(sizes),
        ],
    )?;

    write_single_batch(schema, &batch)
}

#[cfg(test)]
mod tests {
    use arrow::array::{Array, Date32Array, StringArray};
    use chrono::{NaiveDate, TimeZone, Utc};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use uuid::Uuid;

    use super::*;

    fn sample_record() -> ExpenseRecord {
        ExpenseRecord {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            organization_id: Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap(),
            user_id: Uuid::parse_str("6ba7b811-9dad-11d1-80b4-00c04fd430c8").unwrap(),
            description: Some("Team lunch".to_string()),
            amount: Some("42.50".to_string()),
            currency: "USD".to_string(),
            category: Some("Meals".to_string()),
            subcategory: None,
            vendor: Some("Harbor Grill".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 16, 9, 30, 0).unwrap(),
            status: "approved".to_string(),
            billable: true,
            receipt_url: Some("https://receipts.example.com/r/1".to_string()),
            tags: None,
            notes: None,
            first_name: Some("Ada".to_string()),
            last_name: Some("Park".to_string()),
            email: Some("ada@example.com".to_string()),
            organization_name: Some("Acme".to_string()),
            industry: Some("Technology".to_string()),
            size: Some("11-50".to_string()),
        }
    }

    #[test]
    fn schema_has_all_source_columns() {
        let schema = snapshot_schema();
        assert_eq!(schema.fields().len(), 23);
        assert_eq!(schema.field(0).name(), "id");
        assert_eq!(schema.field(9).name(), "date");
        assert_eq!(schema.field(22).name(), "size");
    }

    #[test]
    fn encodes_rows_and_reads_them_back() {
        let mut second = sample_record();
        second.id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        second.amount = None;
        second.description = None;

        let bytes = encode_expenses(&[sample_record(), second]).unwrap();

        let reader = ParquetRecordBatchReaderBuilder::try_new(bytes)
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(batches.len(), 1);
        let batch = &batches[0];
        assert_eq!(batch.num_rows(), 2);

        let ids = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(ids.value(0), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(ids.value(1), "550e8400-e29b-41d4-a716-446655440001");

        let amounts = batch
            .column(4)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(amounts.value(0), "42.50");
        assert!(amounts.is_null(1));

        // 2024-06-15 is 19889 days after the Unix epoch.
        let dates = batch
            .column(9)
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        assert_eq!(dates.value(0), 19889);
    }

    #[test]
    fn encodes_empty_batch() {
        let bytes = encode_expenses(&[]).unwrap();

        let reader = ParquetRecordBatchReaderBuilder::try_new(bytes)
            .unwrap()
            .build()
            .unwrap();
        let total: usize = reader.map(|batch| batch.unwrap().num_rows()).sum();
        assert_eq!(total, 0);
    }
}
