//! Streaming `.docx` writer.
//!
//! A `.docx` is a zip container of WordprocessingML parts. The fixed parts are written up
//! front; `word/document.xml` is the last entry and is appended to one paragraph at a time,
//! so a document never has to be held in memory.
//!
//! Entry timestamps are pinned to the zip epoch: the same paragraphs always produce the same
//! bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::ConvertError;
use crate::utils::config::DocumentConsts;

pub const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    "</Types>"
);

const PACKAGE_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    "</Relationships>"
);

const DOCUMENT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    "</Relationships>"
);

const STYLES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:docDefaults><w:rPrDefault><w:rPr><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault>"#,
    r#"<w:pPrDefault><w:pPr/></w:pPrDefault></w:docDefaults>"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    "</w:styles>"
);

const DOCUMENT_HEAD: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#
);

const DOCUMENT_TAIL: &str = concat!(
    r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
    r#"<w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" w:header="720" w:footer="720" w:gutter="0"/>"#,
    "</w:sectPr></w:body></w:document>"
);

/// Fixed parts, in container order. `word/document.xml` follows them.
const STATIC_PARTS: [(&str, &str); 4] = [
    ("[Content_Types].xml", CONTENT_TYPES),
    ("_rels/.rels", PACKAGE_RELS),
    ("word/_rels/document.xml.rels", DOCUMENT_RELS),
    ("word/styles.xml", STYLES),
];

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

/// True for characters allowed in XML 1.0 content.
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Append `text` to `out` with XML markup characters escaped.
/// Returns the first character that cannot be represented in XML.
pub fn escape_xml_text(text: &str, out: &mut String) -> Result<(), char> {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if !is_xml_char(c) => return Err(c),
            c => out.push(c),
        }
    }
    Ok(())
}

/// Render one paragraph (`<w:p>`) with the fixed space-after. Tabs become `<w:tab/>`.
pub fn render_paragraph(text: &str, out: &mut String) -> Result<(), char> {
    let after = DocumentConsts::SPACE_AFTER_PT * DocumentConsts::TWIPS_PER_PT;
    out.push_str(r#"<w:p><w:pPr><w:spacing w:after=""#);
    out.push_str(&after.to_string());
    out.push_str(r#""/></w:pPr><w:r>"#);
    for (i, segment) in text.split('\t').enumerate() {
        if i > 0 {
            out.push_str("<w:tab/>");
        }
        if !segment.is_empty() {
            out.push_str(r#"<w:t xml:space="preserve">"#);
            escape_xml_text(segment, out)?;
            out.push_str("</w:t>");
        }
    }
    out.push_str("</w:r></w:p>");
    Ok(())
}

/// Writes one `.docx` file at `path`, paragraph by paragraph.
pub struct DocxWriter {
    zip: ZipWriter<BufWriter<File>>,
    path: PathBuf,
    scratch: String,
    paragraphs: usize,
}

impl DocxWriter {
    /// Create (or truncate) `path` and write every part except the paragraphs.
    pub fn create(path: &Path) -> Result<Self, ConvertError> {
        let file = File::create(path).map_err(|e| ConvertError::write(path, e))?;
        let mut zip = ZipWriter::new(BufWriter::with_capacity(
            DocumentConsts::WRITE_BUFFER_SIZE,
            file,
        ));
        for (name, body) in STATIC_PARTS {
            zip.start_file(name, entry_options())
                .map_err(|e| zip_error(path, e))?;
            zip.write_all(body.as_bytes())
                .map_err(|e| ConvertError::write(path, e))?;
        }
        zip.start_file(DOCUMENT_PART, entry_options())
            .map_err(|e| zip_error(path, e))?;
        let mut writer = Self {
            zip,
            path: path.to_path_buf(),
            scratch: String::new(),
            paragraphs: 0,
        };
        writer.write_raw(DOCUMENT_HEAD)?;
        Ok(writer)
    }

    /// Append one paragraph. `line` is only used to report invalid characters.
    pub fn push_paragraph(&mut self, text: &str, line: usize) -> Result<(), ConvertError> {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        render_paragraph(text, &mut scratch).map_err(|ch| ConvertError::InvalidText { line, ch })?;
        self.write_raw(&scratch)?;
        self.scratch = scratch;
        self.paragraphs += 1;
        Ok(())
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs
    }

    /// Close the body, write the zip directory and flush to disk.
    pub fn finish(mut self) -> Result<usize, ConvertError> {
        self.write_raw(DOCUMENT_TAIL)?;
        let path = self.path;
        let mut out = self.zip.finish().map_err(|e| zip_error(&path, e))?;
        out.flush().map_err(|e| ConvertError::write(&path, e))?;
        Ok(self.paragraphs)
    }

    fn write_raw(&mut self, xml: &str) -> Result<(), ConvertError> {
        self.zip
            .write_all(xml.as_bytes())
            .map_err(|e| ConvertError::write(&self.path, e))
    }
}

/// Container I/O failures are write failures of the document file.
fn zip_error(path: &Path, e: ZipError) -> ConvertError {
    match e {
        ZipError::Io(io) => ConvertError::write(path, io),
        other => ConvertError::Archive(other),
    }
}
