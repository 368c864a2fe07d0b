//! Artifact store gateway
//!
//! Indirection layer over the S3 bucket holding paper PDFs. Callers never
//! see native object addressing: the stored reference is an opaque key
//! derived from the paper id, and read access goes through short-lived
//! presigned URLs or a server-side byte fetch for proxying.
//!
//! Credentials come from the ambient AWS credential chain; none flow
//! through this crate.

use crate::config::StorageConfig;
use crate::errors::{AppError, Result};
use aws_sdk_s3::config::Region;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use std::time::Duration;
use tracing::debug;

/// Lifetime of a presigned download URL.
///
/// URLs are re-resolved on every page render and never cached beyond a
/// single response; after expiry the backend denies the read.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache directive applied at upload: content at a given reference is
/// immutable once published, so downstream CDNs may hold it for a year.
const ARTIFACT_CACHE_CONTROL: &str = "public, max-age=31536000";

const ARTIFACT_CONTENT_TYPE: &str = "application/pdf";

/// Gateway to the PDF artifact bucket
#[derive(Clone)]
pub struct ArtifactGateway {
    client: S3Client,
    bucket: String,
}

impl ArtifactGateway {
    /// Create a gateway from configuration using ambient AWS credentials
    pub async fn new(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(ref region) = config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let aws_config = loader.load().await;

        Self {
            client: S3Client::new(&aws_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Create with an existing S3 client
    pub fn with_client(client: S3Client, bucket: impl Into<String>) -> Self {
        Self { client, bucket: bucket.into() }
    }

    /// The artifact reference for a paper: one artifact per paper,
    /// overwritten on resubmission. This is exactly the key format
    /// consumed by `resolve_download_url` and `fetch_bytes`.
    pub fn object_key(paper_id: &str) -> String {
        format!("{}.pdf", paper_id)
    }

    /// Store a PDF for a paper and return its artifact reference.
    ///
    /// Ingestion-facing: last write wins, no versioning.
    pub async fn store(&self, bytes: Vec<u8>, paper_id: &str) -> Result<String> {
        let key = Self::object_key(paper_id);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(ARTIFACT_CONTENT_TYPE)
            .cache_control(ARTIFACT_CACHE_CONTROL)
            .send()
            .await
            .map_err(|e| AppError::Storage {
                message: format!("Failed to store artifact {}: {}", key, e),
            })?;

        debug!(key = %key, "Artifact stored");

        Ok(key)
    }

    /// Produce a presigned read URL for an artifact reference, valid for
    /// [`SIGNED_URL_TTL`] from issuance.
    ///
    /// Callers skip resolution entirely when a paper has no reference;
    /// a missing PDF is a valid state, not a fetch failure.
    pub async fn resolve_download_url(&self, pdf_path: &str) -> Result<String> {
        let presigning = PresigningConfig::expires_in(SIGNED_URL_TTL).map_err(|e| {
            AppError::Storage {
                message: format!("Invalid presigning configuration: {}", e),
            }
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(pdf_path)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::Storage {
                message: format!("Failed to presign {}: {}", pdf_path, e),
            })?;

        Ok(request.uri().to_string())
    }

    /// Fetch the full artifact bytes for server-side proxying
    pub async fn fetch_bytes(&self, pdf_path: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(pdf_path)
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    AppError::ArtifactNotFound { key: pdf_path.to_string() }
                } else {
                    AppError::Storage {
                        message: format!("Failed to fetch artifact {}: {}", pdf_path, service_err),
                    }
                }
            })?;

        let bytes = response.body.collect().await.map_err(|e| AppError::Storage {
            message: format!("Failed to read artifact body {}: {}", pdf_path, e),
        })?;

        Ok(bytes.into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_is_deterministic() {
        assert_eq!(ArtifactGateway::object_key("2603.01729"), "2603.01729.pdf");
        assert_eq!(
            ArtifactGateway::object_key("2603.01729"),
            ArtifactGateway::object_key("2603.01729")
        );
    }

    #[test]
    fn test_signed_url_ttl_is_one_hour() {
        assert_eq!(SIGNED_URL_TTL, Duration::from_secs(3600));
    }

    fn test_gateway() -> ArtifactGateway {
        // Static credentials make presigning a pure local computation.
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(aws_config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                "test", "test", None, None, "static",
            ))
            .build();
        ArtifactGateway::with_client(S3Client::from_conf(conf), "clawxiv-papers")
    }

    #[tokio::test]
    async fn test_presigned_url_carries_ttl_and_key() {
        let url = test_gateway()
            .resolve_download_url("2603.01729.pdf")
            .await
            .expect("presigning should not fail");

        assert!(url.contains("2603.01729.pdf"));
        assert!(url.contains("X-Amz-Expires=3600"));
    }
}
