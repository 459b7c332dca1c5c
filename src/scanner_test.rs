/// Tests for artifact discovery
#[cfg(test)]
mod tests {
    use crate::error::ReportError;
    use crate::scanner::{find_artifact_files, has_artifact_files};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_finds_artifacts_recursively_sorted_and_relative() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pkg.orders.OrderTest/sub")).unwrap();
        fs::write(dir.path().join("TABLETEST-b.yaml"), "").unwrap();
        fs::write(dir.path().join("TABLETEST-a.yaml"), "").unwrap();
        fs::write(dir.path().join("pkg.orders.OrderTest/sub/TABLETEST-items.yaml"), "").unwrap();

        let files = find_artifact_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("TABLETEST-a.yaml"),
                PathBuf::from("TABLETEST-b.yaml"),
                PathBuf::from("pkg.orders.OrderTest/sub/TABLETEST-items.yaml"),
            ]
        );
    }

    #[test]
    fn test_ignores_non_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("subdir")).unwrap();
        fs::write(dir.path().join("file.txt"), "not a yaml file").unwrap();
        fs::write(dir.path().join("config.yaml"), "key: value").unwrap();
        fs::write(dir.path().join("TABLETEST-wrong.yml"), "").unwrap();
        fs::write(dir.path().join("subdir/another.xml"), "also not yaml").unwrap();
        fs::create_dir_all(dir.path().join("TABLETEST-dir.yaml")).unwrap();

        let files = find_artifact_files(dir.path()).unwrap();

        assert!(files.is_empty(), "unexpected files: {:?}", files);
        assert!(!has_artifact_files(dir.path()));
    }

    #[test]
    fn test_missing_root_is_scan_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = find_artifact_files(&missing).unwrap_err();

        assert!(matches!(err, ReportError::Scan { .. }), "unexpected error: {:?}", err);
        assert!(!has_artifact_files(&missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_artifact_is_found() {
        let dir = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let real = target.path().join("descriptor.yaml");
        fs::write(&real, "\"className\": \"pkg.Linked\"\n").unwrap();
        fs::write(target.path().join("TABLETEST-behind-link.yaml"), "").unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("TABLETEST-a.yaml")).unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked-dir")).unwrap();

        let files = find_artifact_files(dir.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("TABLETEST-a.yaml")]);
        assert!(has_artifact_files(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.yaml"), dir.path().join("TABLETEST-gone.yaml")).unwrap();

        let files = find_artifact_files(dir.path()).unwrap();

        assert!(files.is_empty(), "unexpected files: {:?}", files);
    }
}
