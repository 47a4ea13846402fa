use std::path::Path;

use anyhow::Context;

use crate::cli::root_commands::TextSource;

/// Resolve the source text from `--text` or `--file`.
pub fn read_source(source: &TextSource) -> anyhow::Result<String> {
    match (&source.text, &source.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => read_text_file(path),
        (None, None) => anyhow::bail!("provide the source text with --text or --file"),
    }
}

fn read_text_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read source text from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inline_text_wins() {
        let source = TextSource {
            text: Some("Hola".to_string()),
            file: None,
        };
        assert_eq!(read_source(&source).unwrap(), "Hola");
    }

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Todos los días llueve.").unwrap();
        let source = TextSource {
            text: None,
            file: Some(file.path().to_path_buf()),
        };
        assert_eq!(read_source(&source).unwrap(), "Todos los días llueve.");
    }

    #[test]
    fn missing_file_names_the_path() {
        let source = TextSource {
            text: None,
            file: Some("/nonexistent/lector/texto.txt".into()),
        };
        let message = format!("{:#}", read_source(&source).unwrap_err());
        assert!(message.contains("/nonexistent/lector/texto.txt"));
    }
}
