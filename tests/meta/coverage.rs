//! Checks that the unit test tree stays in lockstep with the source tree

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_every_source_file_has_a_unit_counterpart() {
        let src_paths = rust_paths(Path::new("src"));
        let unit_paths = rust_paths(Path::new("tests/unit"));

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_layout_file(path.as_str()))
            .filter(|path| !unit_paths.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without a unit test counterpart:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_counterpart() {
        let src_paths = rust_paths(Path::new("src"));
        let unit_paths = rust_paths(Path::new("tests/unit"));

        let orphaned: Vec<&String> = unit_paths
            .iter()
            .filter(|path| !is_layout_file(path.as_str()))
            .filter(|path| !src_paths.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without a source counterpart:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let mut untested = Vec::new();
        let result = check_for_tests(Path::new("tests"), &mut untested);
        assert!(result.is_ok(), "failed to scan tests directory");

        assert!(
            untested.is_empty(),
            "test files without any #[test] functions:\n{}",
            untested.join("\n")
        );
    }

    // Harness entry points and module declarations carry no tests of their own
    fn is_layout_file(relative_path: &str) -> bool {
        relative_path == "main.rs"
            || relative_path == "lib.rs"
            || relative_path.ends_with("mod.rs")
    }

    /// Relative paths of every Rust file and directory beneath `base`
    fn rust_paths(base: &Path) -> HashSet<String> {
        let mut paths = HashSet::new();
        let result = collect_rust_paths(base, base, &mut paths);
        assert!(result.is_ok(), "failed to read {}", base.display());
        paths
    }

    fn collect_rust_paths(
        dir: &Path,
        base: &Path,
        paths: &mut HashSet<String>,
    ) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = match path.strip_prefix(base) {
                Ok(stripped) => stripped.to_string_lossy().to_string(),
                Err(_) => return Err(io::Error::other("entry escapes its base directory")),
            };

            if path.is_dir() {
                paths.insert(relative);
                collect_rust_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(())
    }

    fn check_for_tests(dir: &Path, untested: &mut Vec<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                check_for_tests(&path, untested)?;
                continue;
            }

            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let is_layout = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name == "main.rs" || name == "mod.rs");
            if is_layout {
                continue;
            }

            let content = fs::read_to_string(&path)?;
            if !content.contains("#[test]") {
                untested.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
