//! Layout checks: every source file has a unit test file that is compiled and
//! contains tests, and every target listed in the manifest exists

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Files that only wire modules together
    fn is_module_root(relative: &Path) -> bool {
        relative == Path::new("lib.rs")
            || relative == Path::new("main.rs")
            || relative.file_name().is_some_and(|name| name == "mod.rs")
    }

    // Relative paths of every `.rs` file below `base`
    fn rust_files(base: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(base).map_err(io::Error::other)?;
                    files.insert(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }

    fn leaf_files(base: &str) -> io::Result<BTreeSet<PathBuf>> {
        Ok(rust_files(Path::new(base))?
            .into_iter()
            .filter(|path| !is_module_root(path))
            .collect())
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests that each source file has a mirrored unit test file
    // Verified by adding a source file without a test file
    #[test]
    fn test_sources_have_unit_tests() -> io::Result<()> {
        let sources = leaf_files(SRC_DIR)?;
        let tests = leaf_files(UNIT_DIR)?;

        let missing: Vec<_> = sources.difference(&tests).collect();
        assert!(
            missing.is_empty(),
            "Source files without a file under {UNIT_DIR}:\n{}",
            listing(&missing)
        );
        Ok(())
    }

    // Tests that unit test files all belong to a source file
    // Verified by leaving the test file of a deleted module behind
    #[test]
    fn test_unit_tests_have_sources() -> io::Result<()> {
        let sources = leaf_files(SRC_DIR)?;
        let tests = leaf_files(UNIT_DIR)?;

        let orphaned: Vec<_> = tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            listing(&orphaned)
        );
        Ok(())
    }

    // Tests that each unit test file is declared by its directory's mod.rs, so
    // the unit target actually compiles it
    // Verified by dropping a `pub mod` line from tests/unit/render/mod.rs
    #[test]
    fn test_unit_tests_are_declared() -> io::Result<()> {
        let mut undeclared = Vec::new();

        for relative in leaf_files(UNIT_DIR)? {
            let Some(stem) = relative.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = Path::new(UNIT_DIR).join(relative.parent().unwrap_or(Path::new("")));
            let module_root = parent.join("mod.rs");
            let declared = fs::read_to_string(&module_root)
                .map(|content| content.lines().any(|line| line.trim() == format!("pub mod {stem};")))
                .unwrap_or(false);
            if !declared {
                undeclared.push(relative);
            }
        }

        let undeclared: Vec<_> = undeclared.iter().collect();
        assert!(
            undeclared.is_empty(),
            "Unit test files missing from their mod.rs:\n{}",
            listing(&undeclared)
        );
        Ok(())
    }

    // Tests that each unit test file wraps real tests in a cfg(test) module
    // Verified by emptying a unit test file
    #[test]
    fn test_unit_tests_contain_tests() -> io::Result<()> {
        let mut empty = Vec::new();

        for relative in leaf_files(UNIT_DIR)? {
            let content = fs::read_to_string(Path::new(UNIT_DIR).join(&relative))?;
            let wrapped = content.contains("#[cfg(test)]") && content.contains("mod tests");
            if !wrapped || !content.contains("#[test]") {
                empty.push(relative);
            }
        }

        let empty: Vec<_> = empty.iter().collect();
        assert!(
            empty.is_empty(),
            "Unit test files without a cfg(test) tests module:\n{}",
            listing(&empty)
        );
        Ok(())
    }

    // Tests that the test and bench targets named in Cargo.toml exist
    // Verified by renaming benches/render.rs
    #[test]
    fn test_manifest_targets_exist() -> io::Result<()> {
        let manifest = fs::read_to_string("Cargo.toml")?;
        let mut targets = vec![PathBuf::from("tests/pattern.rs")];
        let mut in_bench = false;

        for line in manifest.lines().map(str::trim) {
            if line.starts_with('[') {
                in_bench = line == "[[bench]]";
            } else if let Some(value) = line.strip_prefix("path = ") {
                targets.push(PathBuf::from(value.trim_matches('"')));
            } else if let Some(value) = line.strip_prefix("name = ").filter(|_| in_bench) {
                targets.push(Path::new("benches").join(format!("{}.rs", value.trim_matches('"'))));
            }
        }

        let missing: Vec<_> = targets.iter().filter(|path| !path.is_file()).collect();
        assert!(
            missing.is_empty(),
            "Targets listed in Cargo.toml that do not exist:\n{}",
            listing(&missing)
        );
        Ok(())
    }
}
