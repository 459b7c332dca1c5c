/// Tests for input directory resolution
#[cfg(test)]
mod tests {
    use crate::input_dir::{ResolutionSource, junit_properties_dir, resolve};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_artifact(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("TABLETEST-sample.yaml"), "title: Sample\n").unwrap();
    }

    fn write_properties(base: &Path, content: &str) {
        let resources = base.join("src/test/resources");
        fs::create_dir_all(&resources).unwrap();
        fs::write(resources.join("junit-platform.properties"), content).unwrap();
    }

    #[test]
    fn test_configured_directory_wins() {
        let base = TempDir::new().unwrap();
        write_artifact(&base.path().join("target/junit-jupiter"));

        let resolution = resolve(Some(Path::new("custom/../reports")), base.path(), None);

        assert_eq!(resolution.source, ResolutionSource::Configured);
        assert_eq!(resolution.path, Some(base.path().join("reports")));
        assert_eq!(resolution.candidates, vec![base.path().join("reports")]);
        assert!(resolution.existing_dir().is_none());
    }

    #[test]
    fn test_falls_back_to_maven_then_gradle() {
        let base = TempDir::new().unwrap();
        write_artifact(&base.path().join("build/junit-jupiter"));

        let resolution = resolve(None, base.path(), None);

        assert_eq!(resolution.source, ResolutionSource::Fallback);
        assert_eq!(resolution.path, Some(base.path().join("build/junit-jupiter")));
        assert_eq!(
            resolution.candidates,
            vec![base.path().join("target/junit-jupiter"), base.path().join("build/junit-jupiter")]
        );
    }

    #[test]
    fn test_build_tool_directory_preferred_when_it_has_artifacts() {
        let base = TempDir::new().unwrap();
        let junit = base.path().join("reports/junit");
        write_artifact(&junit);
        write_artifact(&base.path().join("target/junit-jupiter"));

        let resolution = resolve(None, base.path(), Some(&junit));

        assert_eq!(resolution.source, ResolutionSource::JunitProperty);
        assert_eq!(resolution.path, Some(junit.clone()));
        assert_eq!(resolution.candidates[0], junit);
    }

    #[test]
    fn test_properties_file_directory() {
        let base = TempDir::new().unwrap();
        write_properties(base.path(), "# reporting\njunit.platform.reporting.output.dir = custom/junit\n");
        write_artifact(&base.path().join("custom/junit"));

        let resolution = resolve(None, base.path(), None);

        assert_eq!(resolution.source, ResolutionSource::JunitProperty);
        assert_eq!(resolution.path, Some(base.path().join("custom/junit")));
    }

    #[test]
    fn test_unique_number_placeholder_is_truncated() {
        let base = TempDir::new().unwrap();
        write_properties(base.path(), "junit.platform.reporting.output.dir=target/junit-{uniqueNumber}/reports\n");
        assert_eq!(junit_properties_dir(base.path()), Some(base.path().join("target")));

        write_properties(base.path(), "junit.platform.reporting.output.dir={uniqueNumber}\n");
        let bare = junit_properties_dir(base.path()).unwrap();
        assert_eq!(bare, base.path().join("."));
    }

    #[test]
    fn test_missing_or_blank_property_is_ignored() {
        let base = TempDir::new().unwrap();
        assert_eq!(junit_properties_dir(base.path()), None);

        write_properties(base.path(), "junit.platform.reporting.output.dir=\nother.key=value\n");
        assert_eq!(junit_properties_dir(base.path()), None);
    }

    #[test]
    fn test_existing_empty_candidate_is_used_when_nothing_has_artifacts() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("build/junit-jupiter")).unwrap();

        let resolution = resolve(None, base.path(), None);

        assert_eq!(resolution.source, ResolutionSource::Fallback);
        assert_eq!(resolution.existing_dir(), Some(base.path().join("build/junit-jupiter").as_path()));
    }

    #[test]
    fn test_nothing_found_lists_searched_locations() {
        let base = TempDir::new().unwrap();

        let resolution = resolve(None, base.path(), None);

        assert_eq!(resolution.source, ResolutionSource::None);
        assert_eq!(resolution.path, None);
        assert_eq!(
            resolution.candidates,
            vec![base.path().join("target/junit-jupiter"), base.path().join("build/junit-jupiter")]
        );

        let message = resolution.missing_input_message();
        assert!(message.starts_with("Input directory does not exist\nSearched locations:\n"));
        assert!(message.contains(&format!("  - {}", base.path().join("target/junit-jupiter").display())));
        assert!(message.contains(&format!("  - {}", base.path().join("build/junit-jupiter").display())));
    }

    #[test]
    fn test_missing_configured_directory_message() {
        let base = TempDir::new().unwrap();
        let resolution = resolve(Some(Path::new("nope")), base.path(), None);

        let message = resolution.missing_input_message();
        assert!(message.starts_with(&format!("Input directory does not exist: {}", base.path().join("nope").display())));
    }
}
