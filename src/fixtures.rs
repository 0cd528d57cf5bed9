#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::registry;

    /// Minimal realistic appsettings document with an existing flag section.
    pub const SAMPLE: &str = r#"{
  "ConnectionStrings": {
    "Default": "Server=localhost;Database=app"
  },
  "Actions": {
    "legacyCheckout": false
  }
}
"#;

    /// Lay out `{root}/{service}/{file}` for every file of every known
    /// environment, each seeded with [`SAMPLE`]. The returned handle keeps
    /// the tree alive; its path doubles as the base path.
    pub fn service_tree(service: &str) -> TempDir {
        let root = TempDir::new().unwrap();
        let dir = root.path().join(service);
        fs::create_dir_all(&dir).unwrap();
        for code in registry::environment_codes() {
            for file in registry::files_for_environment(code) {
                fs::write(dir.join(file), SAMPLE).unwrap();
            }
        }
        root
    }

    /// Read a file back and return the boolean stored for `flag` under
    /// `"Actions"`, or `None` if the file, section, or flag is missing.
    pub fn flag_value(path: &Path, flag: &str) -> Option<bool> {
        let content = fs::read_to_string(path).ok()?;
        let doc: serde_json::Value = serde_json::from_str(&content).ok()?;
        doc.get("Actions")?.get(flag)?.as_bool()
    }

    #[test]
    fn sample_parses_and_tree_is_complete() {
        let root = service_tree("LockerWebAPI");
        let dir = root.path().join("LockerWebAPI");
        assert!(dir.join("appsettings.json").exists());
        assert!(dir.join("appsettings.SPSProd.json").exists());
        assert_eq!(
            flag_value(&dir.join("appsettings.json"), "legacyCheckout"),
            Some(false)
        );
    }
}
