/// Arrow schema definitions for the synthetic training corpus.
pub mod corpus {
    use arrow::datatypes::{DataType, Field, Schema};

    pub const TEXT_COLUMN: &str = "text";
    pub const LABEL_COLUMN: &str = "label";

    /// Schema for labeled corpus rows: one utterance and its canonical label.
    pub fn example_schema() -> Schema {
        Schema::new(vec![
            Field::new(TEXT_COLUMN, DataType::Utf8, false),
            Field::new(LABEL_COLUMN, DataType::Utf8, false),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::corpus;

    #[test]
    fn example_schema_has_expected_fields() {
        let schema = corpus::example_schema();
        assert_eq!(schema.fields().len(), 2);
        assert!(schema.field_with_name(corpus::TEXT_COLUMN).is_ok());
        assert!(!schema.field_with_name(corpus::LABEL_COLUMN).unwrap().is_nullable());
    }
}
