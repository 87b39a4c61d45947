#[cfg(test)]
mod tests {

    mod model_tests {
        use crate::models::{
            PinMetadata, PinResponse, RelayResult, UploadMetadata, UploadedFile, UPLOAD_FAILED,
        };
        use bytes::Bytes;

        #[test]
        fn test_extension_is_lowercased_with_dot() {
            let file = UploadedFile::new("Report.PDF", "application/pdf", Bytes::new());
            assert_eq!(file.extension(), ".pdf");
        }

        #[test]
        fn test_extension_missing() {
            let file = UploadedFile::new("README", "text/plain", Bytes::new());
            assert_eq!(file.extension(), "");
        }

        #[test]
        fn test_extension_of_dotfile_is_empty() {
            let file = UploadedFile::new(".zip", "application/octet-stream", Bytes::new());
            assert_eq!(file.extension(), "");
        }

        #[test]
        fn test_extension_uses_last_segment() {
            let file = UploadedFile::new("backup.tar.gz", "application/gzip", Bytes::new());
            assert_eq!(file.extension(), ".gz");
        }

        #[test]
        fn test_pinned_result_shape() {
            let metadata = UploadMetadata {
                title: Some("Cat".to_string()),
                description: Some("A cat picture".to_string()),
            };
            let json = serde_json::to_value(RelayResult::pinned("Qm123", metadata)).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "success": true,
                    "message": "File uploaded to IPFS successfully!",
                    "ipfsHash": "Qm123",
                    "metadata": { "title": "Cat", "description": "A cat picture" }
                })
            );
        }

        #[test]
        fn test_failed_result_shape() {
            let json =
                serde_json::to_value(RelayResult::failed(UPLOAD_FAILED, "connection refused"))
                    .unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "success": false,
                    "message": "File upload failed.",
                    "error": "connection refused"
                })
            );
        }

        #[test]
        fn test_pin_metadata_requires_title() {
            assert!(PinMetadata::from_upload(&UploadMetadata::default()).is_none());

            let empty_title = UploadMetadata {
                title: Some(String::new()),
                description: Some("ignored".to_string()),
            };
            assert!(PinMetadata::from_upload(&empty_title).is_none());
        }

        #[test]
        fn test_pin_metadata_defaults_description() {
            let metadata = UploadMetadata {
                title: Some("Holiday".to_string()),
                description: None,
            };
            let pin = PinMetadata::from_upload(&metadata).unwrap();
            assert_eq!(pin.name, "Holiday");
            assert_eq!(pin.description, "");
        }

        #[test]
        fn test_pin_response_parses_pinata_body() {
            let body = r#"{"IpfsHash":"QmXyz","PinSize":1234,"Timestamp":"2024-05-01T10:00:00.000Z","isDuplicate":true}"#;
            let parsed: PinResponse = serde_json::from_str(body).unwrap();
            assert_eq!(parsed.ipfs_hash, "QmXyz");
            assert_eq!(parsed.pin_size, Some(1234));
            assert_eq!(parsed.is_duplicate, Some(true));
        }
    }

    mod relay_error_tests {
        use crate::services::pinning::PinError;
        use crate::services::relay::RelayError;
        use axum::http::StatusCode;

        #[test]
        fn test_client_errors_are_bad_requests() {
            assert_eq!(RelayError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
            let unsupported = RelayError::UnsupportedFileType {
                file_name: "a.exe".to_string(),
                mime_type: "application/x-msdownload".to_string(),
            };
            assert_eq!(unsupported.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(unsupported.message(), "File type not supported!");
        }

        #[test]
        fn test_upstream_errors_are_server_errors() {
            let err = RelayError::Upstream(PinError::Decode("missing field".to_string()));
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.message(), "File upload failed.");
        }
    }

    mod form_tests {
        use crate::client::{RelayClient, SubmitOutcome, UploadForm, SELECT_FILE_PROMPT};

        #[tokio::test]
        async fn test_submit_without_file_is_blocked() {
            // Nothing listens here; a blocked submit never connects.
            let client = RelayClient::new("http://127.0.0.1:9/upload").unwrap();
            let mut form = UploadForm::new();
            form.set_title("Untitled");

            let outcome = form.submit(&client).await;

            assert!(matches!(outcome, SubmitOutcome::Blocked));
            assert_eq!(form.message(), SELECT_FILE_PROMPT);
            assert_eq!(form.title(), "Untitled");
            assert!(!form.is_uploading());
        }
    }
}
