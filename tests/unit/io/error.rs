//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use newsmosaic::TilingRules;
    use newsmosaic::io::error::{MosaicError, invalid_rules};
    use std::error::Error;
    use std::path::PathBuf;

    fn json_error() -> serde_json::Error {
        match serde_json::from_str::<TilingRules>("{not json") {
            Ok(_) => unreachable!("malformed document must not parse"),
            Err(err) => err,
        }
    }

    // Tests document errors name their source in the message
    // Verified by dropping the source name from the format string
    #[test]
    fn test_rules_document_error_display() {
        let error = MosaicError::RulesDocument {
            source_name: "experiment.json".to_string(),
            source: json_error(),
        };

        let message = error.to_string();
        assert!(message.contains("experiment.json"));
        assert!(error.source().is_some());
    }

    // Tests the invalid rules helper carries field, value, and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_rules_helper() {
        let error = invalid_rules("gapPx", &-3.0, &"gap must be finite and non-negative");

        let message = error.to_string();
        assert!(message.contains("gapPx"));
        assert!(message.contains("-3"));
        assert!(message.contains("non-negative"));
        assert!(error.source().is_none());
    }

    // Tests export errors report the destination path
    #[test]
    fn test_layout_export_error_display() {
        let error = MosaicError::LayoutExport {
            path: PathBuf::from("/tmp/layout.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let message = error.to_string();
        assert!(message.contains("/tmp/layout.json"));
        assert!(error.source().is_some());
    }

    // Tests file system errors report the operation and path
    // Verified by dropping the operation from the format string
    #[test]
    fn test_file_system_error_display() {
        let error = MosaicError::FileSystem {
            path: PathBuf::from("/tmp/rules.json"),
            operation: "read rules override",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        let message = error.to_string();
        assert!(message.contains("read rules override"));
        assert!(message.contains("/tmp/rules.json"));
    }

    // Tests encode errors chain their JSON source
    #[test]
    fn test_layout_encode_error_source() {
        let error = MosaicError::LayoutEncode {
            source: json_error(),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("encode"));
    }

    // Tests the blanket conversion from bare I/O errors
    // Verified by mapping to a different variant
    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::other("boom");
        let error = MosaicError::from(io_error);

        assert!(matches!(error, MosaicError::FileSystem { .. }));
    }
}
