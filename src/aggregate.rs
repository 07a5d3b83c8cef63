//! Document model aggregator — groups records by category and sorts them.

use crate::model::{Category, DocModel, Record};

/// Build the document model from classified records.
///
/// Records are grouped into their category bucket and each bucket is sorted
/// lexicographically by name (byte order), so the result is independent of
/// input traversal order. Categories with no records never appear.
pub fn build(records: Vec<(Record, Category)>) -> DocModel {
    let mut model = DocModel::new();

    for (record, category) in records {
        model.entry(category).or_default().push(record);
    }

    for bucket in model.values_mut() {
        bucket.sort_by(|a, b| a.name.cmp(&b.name));
    }

    model
}
