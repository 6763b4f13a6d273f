use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

use crate::error::Result;
use crate::types::Document;

/// Serialize documents as NDJSON, one compact object per line.
pub fn write_ndjson<W: Write>(writer: &mut W, documents: &[Document]) -> Result<()> {
    for doc in documents {
        serde_json::to_writer(&mut *writer, doc)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Temp file in `dir` created with the same mode a plain `File::create` would
/// get, so the umask decides who can read the output.
fn output_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Write the whole collection to `path` in one shot.
///
/// Lines go to a temporary file next to the target which is then renamed over
/// it, so readers see either the previous file or the complete new one.
pub fn write_documents(path: &Path, documents: &[Document]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let tmp = output_temp_file(parent)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        write_ndjson(&mut out, documents)?;
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn doc(id: &str, label: Label) -> Document {
        Document {
            doc_id: id.to_string(),
            title: "A headline long enough".to_string(),
            text: "Body with \"quotes\" and ünïcode".to_string(),
            label,
            url: String::new(),
            date: "December 31, 2017".to_string(),
            source: "kaggle".to_string(),
        }
    }

    #[test]
    fn test_line_format_and_field_order() {
        let mut buf = Vec::new();
        write_ndjson(&mut buf, &[doc("0123456789abcdef", Label::Fake)]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "{\"docId\":\"0123456789abcdef\",\"title\":\"A headline long enough\",\
             \"text\":\"Body with \\\"quotes\\\" and ünïcode\",\"label\":\"fake\",\
             \"url\":\"\",\"date\":\"December 31, 2017\",\"source\":\"kaggle\"}\n"
        );
    }

    #[test]
    fn test_preserves_order() {
        let mut buf = Vec::new();
        let docs = vec![doc("a", Label::Fake), doc("b", Label::Real), doc("c", Label::Fake)];
        write_ndjson(&mut buf, &docs).unwrap();
        let ids: Vec<String> = String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str::<Document>(l).unwrap().doc_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_write_documents_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.jsonl");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale\n").unwrap();

        write_documents(&path, &[doc("a", Label::Real)]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("\"label\":\"real\""));

        let fresh = dir.path().join("deeper/still/out.jsonl");
        write_documents(&fresh, &[]).unwrap();
        assert_eq!(fs::read_to_string(&fresh).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_output_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.jsonl");
        fs::write(&plain, "").unwrap();
        let path = dir.path().join("out.jsonl");
        write_documents(&path, &[doc("a", Label::Fake)]).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&plain));
    }
}
