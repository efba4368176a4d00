//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use datalyzer::AnalysisError;
    use datalyzer::io::error::{empty_input, invalid_parameter, io_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = io_error(
            "reading input",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed"),
        );

        assert!(error.source().is_some());
        assert!(error.to_string().contains("reading input"));
        assert!(AnalysisError::ZeroVariance.source().is_none());
    }

    // Tests the empty input sentinel renders as the user-facing message
    // Verified by including the operation name in the message
    #[test]
    fn test_empty_input_message() {
        assert_eq!(empty_input("histogram").to_string(), "No data to display");
    }

    #[test]
    fn test_messages_include_details() {
        let mismatch = AnalysisError::LengthMismatch { left: 4, right: 3 };
        assert!(mismatch.to_string().contains("4 vs 3"));

        let insufficient = AnalysisError::InsufficientData {
            operation: "trend analysis",
            required: 2,
            actual: 1,
        };
        let message = insufficient.to_string();
        assert!(message.contains("trend analysis"));
        assert!(message.contains("got 1"));

        assert_eq!(
            AnalysisError::ZeroVariance.to_string(),
            "Cannot calculate correlation (zero variance)"
        );

        let parse = AnalysisError::Parse {
            input: "abc".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert!(parse.to_string().contains("'abc'"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("bins", &0, &"must be at least 1");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'bins' = '0': must be at least 1"
        );
    }
}
