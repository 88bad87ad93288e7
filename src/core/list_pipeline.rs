use crate::core::{BuildResult, ConfigProvider, Pipeline, Profile, Storage};
use crate::utils::error::{BuildError, Result};

pub struct ListPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ListPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ListPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Profile>> {
        let input_dir = self.config.input_dir();
        tracing::debug!("Listing profile files in: {}", input_dir);

        let entries = self.storage.list_dir(input_dir).await?;
        tracing::debug!("Found {} entries", entries.len());

        // Every entry must read and parse; the first failure aborts the run
        // with no output written.
        let mut profiles = Vec::with_capacity(entries.len());
        for name in entries {
            let path = format!("{}/{}", input_dir, name);
            let bytes = self.storage.read_file(&path).await?;
            let value: serde_json::Value =
                serde_json::from_slice(&bytes).map_err(|e| BuildError::ParseError {
                    path: path.clone(),
                    source: e,
                })?;
            profiles.push(Profile {
                source: name,
                value,
            });
        }

        Ok(profiles)
    }

    async fn transform(&self, data: Vec<Profile>) -> Result<BuildResult> {
        // The list is the parsed documents verbatim, in enumeration order.
        let mut values = Vec::with_capacity(data.len());
        for profile in &data {
            values.push(profile.value.clone());
        }

        // Compact serialization, matching JSON.stringify: no pretty-printing,
        // no trailing newline.
        let json_output = serde_json::to_string(&serde_json::Value::Array(values))?;

        Ok(BuildResult {
            profiles: data,
            json_output,
        })
    }

    async fn load(&self, result: BuildResult) -> Result<String> {
        let output_file = self.config.output_file();

        tracing::debug!(
            "Writing list ({} bytes) to {}",
            result.json_output.len(),
            output_file
        );
        self.storage
            .write_file(output_file, result.json_output.as_bytes())
            .await?;

        Ok(output_file.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        dirs: Arc<Mutex<HashSet<String>>>,
        files: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                dirs: Arc::new(Mutex::new(HashSet::new())),
                files: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn add_dir(&self, path: &str) {
            self.dirs.lock().await.insert(path.to_string());
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            if let Some((dir, _)) = path.rsplit_once('/') {
                self.dirs.lock().await.insert(dir.to_string());
            }
            let mut files = self.files.lock().await;
            if let Some(pos) = files.iter().position(|(p, _)| p == path) {
                files[pos].1 = data.to_vec();
            } else {
                files.push((path.to_string(), data.to_vec()));
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.iter().find(|(p, _)| p == path).map(|(_, d)| d.clone())
        }
    }

    impl Storage for MockStorage {
        async fn list_dir(&self, path: &str) -> Result<Vec<String>> {
            let dirs = self.dirs.lock().await;
            if !dirs.contains(path) {
                return Err(BuildError::InputDirError {
                    path: path.to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no such directory",
                    ),
                });
            }

            let files = self.files.lock().await;
            let prefix = format!("{}/", path);
            Ok(files
                .iter()
                .filter_map(|(p, _)| p.strip_prefix(&prefix))
                .filter(|rest| !rest.contains('/'))
                .map(|rest| rest.to_string())
                .collect())
        }

        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files
                .iter()
                .find(|(p, _)| p == path)
                .map(|(_, d)| d.clone())
                .ok_or_else(|| BuildError::InputFileError {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.put_file(path, data).await;
            Ok(())
        }
    }

    struct MockConfig {
        input_dir: String,
        output_file: String,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                input_dir: "data".to_string(),
                output_file: "list.json".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_dir(&self) -> &str {
            &self.input_dir
        }

        fn output_file(&self) -> &str {
            &self.output_file
        }
    }

    #[tokio::test]
    async fn test_extract_reads_profiles_in_listing_order() {
        let storage = MockStorage::new();
        storage.put_file("data/a.json", br#"{"id":1}"#).await;
        storage.put_file("data/b.json", br#"{"id":2}"#).await;

        let pipeline = ListPipeline::new(storage, MockConfig::new());
        let profiles = pipeline.extract().await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].source, "a.json");
        assert_eq!(profiles[0].value, json!({"id": 1}));
        assert_eq!(profiles[1].source, "b.json");
        assert_eq!(profiles[1].value, json!({"id": 2}));
    }

    #[tokio::test]
    async fn test_extract_empty_directory() {
        let storage = MockStorage::new();
        storage.add_dir("data").await;

        let pipeline = ListPipeline::new(storage, MockConfig::new());
        let profiles = pipeline.extract().await.unwrap();

        assert!(profiles.is_empty());
    }

    #[tokio::test]
    async fn test_extract_missing_directory_fails() {
        let pipeline = ListPipeline::new(MockStorage::new(), MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, BuildError::InputDirError { .. }));
    }

    #[tokio::test]
    async fn test_extract_malformed_json_fails() {
        let storage = MockStorage::new();
        storage.put_file("data/good.json", br#"{"id":1}"#).await;
        storage.put_file("data/bad.json", b"{bad json").await;

        let pipeline = ListPipeline::new(storage, MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();

        match err {
            BuildError::ParseError { path, .. } => assert_eq!(path, "data/bad.json"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transform_preserves_order_and_serializes_compact() {
        let pipeline = ListPipeline::new(MockStorage::new(), MockConfig::new());

        let data = vec![
            Profile {
                source: "a.json".to_string(),
                value: json!({"id": 1}),
            },
            Profile {
                source: "b.json".to_string(),
                value: json!({"id": 2}),
            },
        ];

        let result = pipeline.transform(data).await.unwrap();

        assert_eq!(result.profiles.len(), 2);
        assert_eq!(result.json_output, r#"[{"id":1},{"id":2}]"#);
    }

    #[tokio::test]
    async fn test_transform_empty_input() {
        let pipeline = ListPipeline::new(MockStorage::new(), MockConfig::new());

        let result = pipeline.transform(Vec::new()).await.unwrap();

        assert!(result.profiles.is_empty());
        assert_eq!(result.json_output, "[]");
    }

    #[tokio::test]
    async fn test_transform_accepts_non_object_documents() {
        let pipeline = ListPipeline::new(MockStorage::new(), MockConfig::new());

        let data = vec![
            Profile {
                source: "n.json".to_string(),
                value: json!(1),
            },
            Profile {
                source: "s.json".to_string(),
                value: json!("two"),
            },
            Profile {
                source: "a.json".to_string(),
                value: json!([3, 4]),
            },
        ];

        let result = pipeline.transform(data).await.unwrap();

        assert_eq!(result.json_output, r#"[1,"two",[3,4]]"#);
    }

    #[tokio::test]
    async fn test_load_writes_output_file() {
        let storage = MockStorage::new();
        let pipeline = ListPipeline::new(storage.clone(), MockConfig::new());

        let result = BuildResult {
            profiles: vec![],
            json_output: r#"[{"id":1}]"#.to_string(),
        };

        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "list.json");
        let written = storage.get_file("list.json").await.unwrap();
        assert_eq!(written, br#"[{"id":1}]"#.to_vec());
    }
}
