// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Turns user input into Documents:
//
//   FileLoader   → a list of paths (.txt, .docx, .pdf, or
//                  directories holding them)
//   InlineSource → text passed straight on the command line
//
// A file that can't be read never aborts the run: it is logged
// and contributes an empty Document, so the generator simply
// sees less text.
//
// .docx files are ZIP archives of XML. docx-rs parses them into:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// File formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Docx,
    Pdf,
}

impl FileKind {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "text" | "md" => Some(Self::PlainText),
            "docx"                => Some(Self::Docx),
            "pdf"                 => Some(Self::Pdf),
            _                     => None,
        }
    }
}

// ─── FileLoader ───────────────────────────────────────────────────────────────
/// Loads documents from files and directories.
pub struct FileLoader {
    paths: Vec<PathBuf>,
}

impl FileLoader {
    pub fn new<P: Into<PathBuf>>(paths: impl IntoIterator<Item = P>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Expand directories into their supported files, sorted by name
    /// so repeated runs see the same document order.
    fn expand(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in &self.paths {
            if path.is_dir() {
                let mut entries: Vec<PathBuf> = fs::read_dir(path)
                    .with_context(|| format!("Cannot read directory '{}'", path.display()))?
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .filter(|p| p.is_file() && FileKind::from_path(p).is_some())
                    .collect();
                entries.sort();
                tracing::debug!("Directory '{}' holds {} documents", path.display(), entries.len());
                files.extend(entries);
            } else {
                files.push(path.clone());
            }
        }
        Ok(files)
    }
}

impl DocumentSource for FileLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        let mut docs = Vec::new();

        for path in self.expand()? {
            let source = file_label(&path);
            let text = match load_file(&path) {
                Ok(text) => {
                    tracing::debug!("Loaded: {} ({} chars)", source, text.len());
                    text
                }
                // Unreadable files contribute empty text
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", path.display(), e);
                    String::new()
                }
            };
            docs.push(Document::new(source, text));
        }

        tracing::info!("Loaded {} documents", docs.len());
        Ok(docs)
    }
}

// ─── InlineSource ─────────────────────────────────────────────────────────────
/// A single document from text supplied directly by the user.
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for InlineSource {
    fn load_all(&self) -> Result<Vec<Document>> {
        Ok(vec![Document::inline(self.text.clone())])
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Read one file according to its extension.
fn load_file(path: &Path) -> Result<String> {
    match FileKind::from_path(path) {
        Some(FileKind::PlainText) => load_plain_text(path),
        Some(FileKind::Docx)      => load_docx_text(path),
        Some(FileKind::Pdf)       => load_pdf_text(path),
        None => anyhow::bail!("unsupported file type (expected .txt, .docx or .pdf)"),
    }
}

/// Read a text file as UTF-8. Invalid byte sequences are dropped.
fn load_plain_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    Ok(decode_utf8_dropping_invalid(&bytes))
}

fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Extract the text of every page of a PDF.
fn load_pdf_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    // pdf-extract panics on some malformed files instead of returning Err
    let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
        .map_err(|_| anyhow::anyhow!("pdf-extract panicked on '{}'", path.display()))?;

    extracted.map_err(|e| anyhow::anyhow!("pdf-extract error in '{}': {}", path.display(), e))
}

/// Parse a .docx file and return its paragraphs joined by newlines.
fn load_docx_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Tables, images and section properties carry no prose
        if let DocumentChild::Paragraph(para) = child {
            let para_text = extract_paragraph_text(para);
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    // Blank line between paragraphs so headings don't run into body text
    Ok(paragraphs.join("\n\n"))
}

/// Concatenate the text runs of one paragraph.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_path(Path::new("a.TXT")), Some(FileKind::PlainText));
        assert_eq!(FileKind::from_path(Path::new("b.docx")), Some(FileKind::Docx));
        assert_eq!(FileKind::from_path(Path::new("c.PDF")), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_path(Path::new("d.rtf")), None);
        assert_eq!(FileKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_invalid_utf8_bytes_are_dropped() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"The \xffcat sat.\xc3").unwrap();

        let docs = FileLoader::new([&path]).load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "notes.txt");
        assert_eq!(docs[0].text, "The cat sat.");
    }

    #[test]
    fn test_missing_unsupported_and_corrupt_files_become_empty() {
        let dir = tempdir().unwrap();
        let rtf = dir.path().join("notes.rtf");
        fs::write(&rtf, b"{\\rtf1 hello}").unwrap();
        let broken_pdf = dir.path().join("scan.pdf");
        fs::write(&broken_pdf, b"%PDF-1.4 truncated").unwrap();
        let missing = dir.path().join("gone.txt");

        let docs = FileLoader::new([rtf, broken_pdf, missing]).load_all().unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(Document::is_blank));
    }

    #[test]
    fn test_reads_pdf_text() {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Object, Stream};

        let mut pdf = lopdf::Document::with_version("1.5");
        let pages_id = pdf.new_object_id();
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = pdf.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal("The cat sat on the mat.")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);

        let dir  = tempdir().unwrap();
        let path = dir.path().join("lesson.pdf");
        pdf.save(&path).unwrap();

        let docs = FileLoader::new([&path]).load_all().unwrap();
        assert_eq!(docs[0].source, "lesson.pdf");
        assert!(docs[0].text.contains("The cat sat on the mat."));
    }

    #[test]
    fn test_directory_is_expanded_in_name_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "Second.").unwrap();
        fs::write(dir.path().join("a.txt"), "First.").unwrap();
        fs::write(dir.path().join("ignored.bin"), "x").unwrap();

        let docs = FileLoader::new([dir.path()]).load_all().unwrap();
        let sources: Vec<&str> = docs.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_reads_docx_paragraphs() {
        use docx_rs::{Docx, Paragraph, Run};

        let dir  = tempdir().unwrap();
        let path = dir.path().join("lesson.docx");
        let file = File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("The cat sat.")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("The dog ran.")))
            .build()
            .pack(file)
            .unwrap();

        let docs = FileLoader::new([&path]).load_all().unwrap();
        assert_eq!(docs[0].text, "The cat sat.\n\nThe dog ran.");
    }

    #[test]
    fn test_inline_source() {
        let docs = InlineSource::new("Hello world.").load_all().unwrap();
        assert_eq!(docs, vec![Document::inline("Hello world.")]);
    }
}
