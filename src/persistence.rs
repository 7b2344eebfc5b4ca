//! Kernel file serialization
//!
//! Saves and loads kernel descriptions as JSON, together with metadata
//! recording which library version wrote them and when. Used by the CLI to
//! hand settled hyperparameters from one run to the next.

use crate::config::KernelConfig;
use crate::core::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A kernel description as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelFile {
    /// The kernel itself
    pub kernel: KernelConfig,
    /// File metadata
    pub metadata: KernelMetadata,
}

/// Metadata for tracking where a kernel file came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelMetadata {
    /// Library version used to write the file
    pub library_version: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl KernelFile {
    /// Wrap a kernel description, stamping it with the current version and time
    pub fn new(kernel: KernelConfig) -> Self {
        Self {
            kernel,
            metadata: KernelMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
                description: None,
            },
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    /// Save to file as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        debug!("Saved {} kernel to {:?}", self.kernel.kind(), path);
        Ok(())
    }

    /// Load from file
    ///
    /// Only the JSON structure is checked here; parameters are validated when
    /// the kernel is built.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let kernel_file: KernelFile = serde_json::from_reader(reader)?;
        debug!(
            "Loaded {} kernel from {:?} (written by version {})",
            kernel_file.kernel.kind(),
            path,
            kernel_file.metadata.library_version
        );
        Ok(kernel_file)
    }

    /// Print file summary
    pub fn print_summary(&self) {
        println!("=== Kernel Summary ===");
        println!("Kernel: {}", self.kernel);
        println!("Type: {}", self.kernel.kind());
        if let Some(description) = &self.metadata.description {
            println!("Description: {description}");
        }
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KernelError;
    use crate::kernel::LogKernel;
    use tempfile::NamedTempFile;

    fn sample_config() -> KernelConfig {
        KernelConfig::Sum {
            kernels: vec![
                KernelConfig::UnitSqExp { log_bandwidth: 0.3 },
                KernelConfig::FixedNoise { log_noise: -6.0 },
            ],
        }
    }

    #[test]
    fn test_kernel_file_save_and_load() -> Result<()> {
        let kernel_file = KernelFile::new(sample_config()).with_description("test kernel");

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        kernel_file.save_to_file(temp_file.path())?;

        let loaded = KernelFile::load_from_file(temp_file.path())?;
        assert_eq!(loaded, kernel_file);
        assert_eq!(loaded.metadata.description.as_deref(), Some("test kernel"));
        assert_eq!(loaded.metadata.library_version, env!("CARGO_PKG_VERSION"));

        Ok(())
    }

    #[test]
    fn test_loaded_kernel_evaluates_identically() -> Result<()> {
        let kernel_file = KernelFile::new(sample_config());
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        kernel_file.save_to_file(temp_file.path())?;

        let original = kernel_file.kernel.build()?;
        let reloaded = KernelFile::load_from_file(temp_file.path())?.kernel.build()?;

        let x = [0.5, 1.0];
        let y = [1.5, -1.0];
        assert_eq!(original.log_eval(&x, &y), reloaded.log_eval(&x, &y));
        assert_eq!(original.log_eval(&x, &x), reloaded.log_eval(&x, &x));
        Ok(())
    }

    #[test]
    fn test_metadata_timestamp_is_rfc3339() {
        let kernel_file = KernelFile::new(sample_config());
        assert!(chrono::DateTime::parse_from_rfc3339(&kernel_file.metadata.created_at).is_ok());
    }

    #[test]
    fn test_description_is_optional_in_json() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            temp_file,
            r#"{{
                "kernel": {{"type": "fixed_noise", "log_noise": -1.0}},
                "metadata": {{"library_version": "0.0.1", "created_at": "2024-01-01T00:00:00+00:00"}}
            }}"#
        )
        .expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        let loaded = KernelFile::load_from_file(temp_file.path()).expect("Failed to load");
        assert_eq!(loaded.metadata.description, None);
        assert_eq!(loaded.kernel, KernelConfig::FixedNoise { log_noise: -1.0 });
    }

    #[test]
    fn test_load_missing_file() {
        let err = KernelFile::load_from_file("/nonexistent/kernel.json").unwrap_err();
        assert!(matches!(err, KernelError::IoError(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "{{ not a kernel").expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        let err = KernelFile::load_from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, KernelError::SerializationError(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_reports_write_failure() {
        let kernel_file = KernelFile::new(KernelConfig::FixedNoise { log_noise: -1.0 });
        let err = kernel_file.save_to_file("/dev/full").unwrap_err();
        assert!(matches!(err, KernelError::IoError(_)));
    }
}
