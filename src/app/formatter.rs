use crate::app::error::CollectError;
use crate::app::models::{DecodePolicy, FileEntry};
use std::fs;

pub const TITLE: &str = "# CONTEXTO DEL PROYECTO CODE-PILOT";
pub const INDEX_HEADING: &str = "## ÍNDICE DE ARCHIVOS";
pub const CONTENT_HEADING: &str = "## CONTENIDO DE LOS ARCHIVOS";

pub struct OutputGenerator;

/// A finished document plus how many files could not be read.
#[derive(Debug)]
pub struct Rendered {
    pub document: String,
    pub read_failures: usize,
}

impl OutputGenerator {
    /// Builds the whole document. Entries are emitted in the order given,
    /// so the index and the content section always agree.
    pub fn render(entries: &[FileEntry], policy: DecodePolicy) -> Rendered {
        let mut document = Self::generate_index(entries);
        let mut read_failures = 0;

        document.push_str(CONTENT_HEADING);
        document.push_str("\n\n");

        for entry in entries {
            match read_entry(entry, policy) {
                Ok(content) => {
                    document.push_str(&format!(
                        "### `{}`\n```\n{}\n```\n\n",
                        entry.relative_path, content
                    ));
                }
                Err(err) => {
                    log::warn!("  Could not read {}: {}", entry.path.display(), err);
                    read_failures += 1;
                    document.push_str(&format!(
                        "### `{}` (ERROR DE LECTURA)\n// No se pudo leer el archivo. Error: {}\n\n",
                        entry.relative_path, err
                    ));
                }
            }
        }

        Rendered {
            document,
            read_failures,
        }
    }

    /// Title, index heading and one list item per entry, closed by the
    /// horizontal rule that separates the index from the contents.
    pub fn generate_index(entries: &[FileEntry]) -> String {
        let mut output = format!("{}\n\n{}\n\n", TITLE, INDEX_HEADING);

        for entry in entries {
            output.push_str(&format!("- `{}`\n", entry.relative_path));
        }

        output.push_str("\n\n---\n\n");
        output
    }
}

/// Reads one file fully and decodes it under `policy`. Only I/O can fail
/// here; bad encodings never do.
pub fn read_entry(entry: &FileEntry, policy: DecodePolicy) -> Result<String, CollectError> {
    let bytes = fs::read(&entry.path).map_err(|source| CollectError::Read {
        path: entry.path.clone(),
        source,
    })?;

    Ok(decode(&bytes, policy))
}

pub fn decode(bytes: &[u8], policy: DecodePolicy) -> String {
    match policy {
        DecodePolicy::Drop => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
        DecodePolicy::Replace => String::from_utf8_lossy(bytes).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn entry(path: PathBuf, relative: &str) -> FileEntry {
        FileEntry {
            path,
            relative_path: relative.to_string(),
        }
    }

    #[test]
    fn test_render_document_layout() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.ts"), "const a = 1;").unwrap();
        fs::write(dir.path().join("b.md"), "# B\n").unwrap();

        let entries = vec![
            entry(dir.path().join("a.ts"), "a.ts"),
            entry(dir.path().join("b.md"), "docs/b.md"),
        ];

        let rendered = OutputGenerator::render(&entries, DecodePolicy::Drop);

        let expected = concat!(
            "# CONTEXTO DEL PROYECTO CODE-PILOT\n\n",
            "## ÍNDICE DE ARCHIVOS\n\n",
            "- `a.ts`\n",
            "- `docs/b.md`\n",
            "\n\n---\n\n",
            "## CONTENIDO DE LOS ARCHIVOS\n\n",
            "### `a.ts`\n```\nconst a = 1;\n```\n\n",
            "### `docs/b.md`\n```\n# B\n\n```\n\n",
        );
        assert_eq!(rendered.document, expected);
        assert_eq!(rendered.read_failures, 0);
    }

    #[test]
    fn test_render_empty() {
        let rendered = OutputGenerator::render(&[], DecodePolicy::Drop);

        assert_eq!(
            rendered.document,
            "# CONTEXTO DEL PROYECTO CODE-PILOT\n\n## ÍNDICE DE ARCHIVOS\n\n\n\n---\n\n## CONTENIDO DE LOS ARCHIVOS\n\n"
        );
    }

    #[test]
    fn test_render_read_failure_is_placeholder() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.ts"), "ok").unwrap();

        let entries = vec![
            entry(dir.path().join("gone.ts"), "gone.ts"),
            entry(dir.path().join("ok.ts"), "ok.ts"),
        ];

        let rendered = OutputGenerator::render(&entries, DecodePolicy::Drop);

        assert_eq!(rendered.read_failures, 1);
        assert!(rendered.document.contains("- `gone.ts`\n- `ok.ts`\n"));
        assert!(rendered.document.contains(
            "### `gone.ts` (ERROR DE LECTURA)\n// No se pudo leer el archivo. Error: Failed to read"
        ));
        assert!(rendered.document.contains("### `ok.ts`\n```\nok\n```\n\n"));

        let failed = rendered.document.find("(ERROR DE LECTURA)").unwrap();
        let ok = rendered.document.find("### `ok.ts`").unwrap();
        assert!(failed < ok);
    }

    #[test]
    fn test_read_entry_missing_file() {
        let dir = tempdir().unwrap();
        let missing = entry(dir.path().join("missing.ts"), "missing.ts");

        let err = read_entry(&missing, DecodePolicy::Drop).unwrap_err();
        assert!(matches!(err, CollectError::Read { ref path, .. } if *path == missing.path));
    }

    #[test]
    fn test_decode_drop_discards_invalid_bytes() {
        let bytes = b"caf\xc3\xa9 \xff\xfeok\x80";
        assert_eq!(decode(bytes, DecodePolicy::Drop), "café ok");
    }

    #[test]
    fn test_decode_replace_substitutes() {
        let bytes = b"a\xffb";
        assert_eq!(decode(bytes, DecodePolicy::Replace), "a\u{FFFD}b");
    }

    #[test]
    fn test_decode_keeps_valid_text_untouched() {
        let text = "línea 1\r\nlínea 2\n\u{FFFD}";
        assert_eq!(decode(text.as_bytes(), DecodePolicy::Drop), text);
    }

    #[test]
    fn test_render_lossy_content() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bin.js"), b"let x\xff = 1;").unwrap();

        let entries = vec![entry(dir.path().join("bin.js"), "bin.js")];
        let rendered = OutputGenerator::render(&entries, DecodePolicy::Drop);

        assert_eq!(rendered.read_failures, 0);
        assert!(rendered.document.contains("```\nlet x = 1;\n```"));
    }
}
