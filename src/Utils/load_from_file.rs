//! Reading mechanism sources from disk and writing the translated result.
use crate::Translator::errors::TranslatorError;
use crate::Translator::mechanism::Mechanism;
use log::{error, info};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const SPECIES_FILE: &str = "species.json";
pub const REACTIONS_FILE: &str = "reactions.json";
pub const UNKNOWNS_FILE: &str = "unknowns.txt";

/// Files of the mechanism `name` in `dir`: every `<name>*<suffix>` file, grouped
/// by suffix in the order given, alphabetical within one suffix.
pub fn find_source_files(
    dir: &Path,
    name: &str,
    suffixes: &[&str],
) -> Result<Vec<PathBuf>, TranslatorError> {
    if !dir.is_dir() {
        error!("input directory '{}' does not exist", dir.display());
        return Err(TranslatorError::Config(format!(
            "input directory '{}' does not exist",
            dir.display()
        )));
    }
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| TranslatorError::io(dir, e))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    candidates.sort();

    let mut files = Vec::new();
    for suffix in suffixes {
        for path in &candidates {
            let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
                continue;
            };
            if file_name.starts_with(name) && file_name.ends_with(suffix) {
                files.push(path.clone());
            }
        }
    }
    if files.is_empty() {
        return Err(TranslatorError::Config(format!(
            "no files '{}*' with suffixes {:?} in '{}'",
            name,
            suffixes,
            dir.display()
        )));
    }
    Ok(files)
}

/// Reads one source file with tabs turned into spaces and blank lines dropped.
pub fn read_source_file(path: &Path) -> Result<Vec<String>, TranslatorError> {
    let file = File::open(path).map_err(|e| TranslatorError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| TranslatorError::io(path, e))?;
        let line = line.replace('\t', " ");
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    info!("read {} lines from '{}'", lines.len(), path.display());
    Ok(lines)
}

/// All source files of a mechanism joined into one text.
pub fn load_mechanism_text(
    dir: &Path,
    name: &str,
    suffixes: &[&str],
) -> Result<String, TranslatorError> {
    let mut lines = Vec::new();
    for path in find_source_files(dir, name, suffixes)? {
        lines.extend(read_source_file(&path)?);
    }
    Ok(lines.join("\n"))
}

/// Writes `species.json`, `reactions.json` and `unknowns.txt` into
/// `<output_dir>/<mechanism name>/`, creating it if needed. Returns that directory.
pub fn write_mechanism(
    output_dir: &Path,
    mechanism: &Mechanism,
    unknowns: &[String],
) -> Result<PathBuf, TranslatorError> {
    let dir = output_dir.join(&mechanism.name);
    fs::create_dir_all(&dir).map_err(|e| TranslatorError::io(&dir, e))?;

    let write = |file: &str, content: String| -> Result<(), TranslatorError> {
        let path = dir.join(file);
        fs::write(&path, content).map_err(|e| TranslatorError::io(&path, e))?;
        info!("written '{}'", path.display());
        Ok(())
    };
    write(SPECIES_FILE, mechanism.species_json()?)?;
    write(REACTIONS_FILE, mechanism.reactions_json()?)?;
    let mut report = unknowns.join("\n");
    if !report.is_empty() {
        report.push('\n');
    }
    write(UNKNOWNS_FILE, report)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translator::mechanism::Species;
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str, content: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_find_source_files_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "racm.eqn", "");
        touch(dir.path(), "racm.spc", "");
        touch(dir.path(), "racm_extra.spc", "");
        touch(dir.path(), "other.spc", "");
        touch(dir.path(), "racm.txt", "");
        let files = find_source_files(dir.path(), "racm", &[".spc", ".eqn"]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["racm.spc", "racm_extra.spc", "racm.eqn"]);
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            find_source_files(&missing, "racm", &[".kpp"]),
            Err(TranslatorError::Config(_))
        ));
        assert!(matches!(
            find_source_files(dir.path(), "racm", &[".kpp"]),
            Err(TranslatorError::Config(_))
        ));
    }

    #[test]
    fn test_read_source_file_cleans_lines() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "m.eqn", "#EQUATIONS\n\n\t<R1>\tA = B : 1.0 ;\n   \n");
        let lines = read_source_file(&dir.path().join("m.eqn")).unwrap();
        assert_eq!(lines, vec!["#EQUATIONS", " <R1> A = B : 1.0 ;"]);
    }

    #[test]
    fn test_load_mechanism_text_joins_files() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "m.spc", "#DEFVAR\nA = IGNORE ;\n");
        touch(dir.path(), "m.eqn", "#EQUATIONS\n<R1> A = B : 1.0 ;\n");
        let text = load_mechanism_text(dir.path(), "m", &[".spc", ".eqn"]).unwrap();
        assert_eq!(text, "#DEFVAR\nA = IGNORE ;\n#EQUATIONS\n<R1> A = B : 1.0 ;");
    }

    #[test]
    fn test_write_mechanism() {
        let dir = tempdir().unwrap();
        let mut mechanism = Mechanism::new("TEST");
        mechanism.add_species(vec![Species::variable("O3", 1e-12)]);
        let out = write_mechanism(dir.path(), &mechanism, &["R7".to_string()]).unwrap();
        assert_eq!(out, dir.path().join("TEST"));
        assert!(out.join(SPECIES_FILE).exists());
        assert!(out.join(REACTIONS_FILE).exists());
        assert_eq!(fs::read_to_string(out.join(UNKNOWNS_FILE)).unwrap(), "R7\n");

        write_mechanism(dir.path(), &mechanism, &[]).unwrap();
        assert_eq!(fs::read_to_string(out.join(UNKNOWNS_FILE)).unwrap(), "");
    }
}
