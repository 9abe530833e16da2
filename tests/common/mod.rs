//! Shared helpers: scratch directories and reading generated documents back.

#![allow(dead_code)]

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use txtdocx::ConvertOpts;
use zip::ZipArchive;

/// Temp workspace with `novel/` (created) and `output/` (not created).
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let input = dir.path().join("novel");
        let output = dir.path().join("output");
        std::fs::create_dir(&input).unwrap();
        Self { dir, input, output }
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.input.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn opts(&self) -> ConvertOpts {
        ConvertOpts {
            input_dir: self.input.clone(),
            output_dir: self.output.clone(),
            ..ConvertOpts::default()
        }
    }

    pub fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.output)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Raw `word/document.xml` of a generated document.
pub fn document_xml(path: &Path) -> String {
    let file = File::open(path).unwrap();
    let mut archive = ZipArchive::new(file).expect("docx is a zip container");
    let mut entry = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

/// Paragraph texts of a generated document, in order. `<w:tab/>` reads back as `\t`.
pub fn docx_paragraphs(path: &Path) -> Vec<String> {
    let xml = document_xml(path);
    xml.split("<w:p>")
        .skip(1)
        .map(|chunk| {
            let body = &chunk[..chunk.find("</w:p>").expect("closed paragraph")];
            paragraph_text(body)
        })
        .collect()
}

fn paragraph_text(body: &str) -> String {
    let mut out = String::new();
    let mut in_text = false;
    let mut i = 0;
    while let Some(lt) = body[i..].find('<') {
        let start = i + lt;
        if in_text {
            out.push_str(&body[i..start]);
        }
        let end = start + body[start..].find('>').unwrap();
        let tag = &body[start + 1..end];
        if tag == "w:t" || tag.starts_with("w:t ") {
            in_text = true;
        } else if tag == "/w:t" {
            in_text = false;
        } else if tag == "w:tab/" {
            out.push('\t');
        }
        i = end + 1;
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
