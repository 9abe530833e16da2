use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use txtdocx::engine::{
    Cli, Commands, convert_opts_from, escape_xml_text, has_extension, is_os_hidden_file,
    is_xml_char, line_paragraphs, normalize_extension, output_path_for, render_paragraph,
    summary_lines, unite_opts_from,
};
use txtdocx::pipeline::{discover_sources, pool_tuning};
use txtdocx::unite::entry_file_name;
use txtdocx::utils::temp_path_for;
use txtdocx::utils::txtdocx_toml::{load_txtdocx_toml, parse_txtdocx_toml};
use txtdocx::{ConversionResult, ConvertError, RunSummary};

// --- extensions / paths ---

#[test]
fn test_has_extension_case_sensitive() {
    assert!(has_extension(Path::new("a/b.txt"), "txt"));
    assert!(!has_extension(Path::new("a/b.TXT"), "txt"));
    assert!(!has_extension(Path::new("a/b.txt.bak"), "txt"));
    assert!(!has_extension(Path::new("a/txt"), "txt"));
}

#[test]
fn test_normalize_extension_strips_dot() {
    assert_eq!(normalize_extension(".docx"), "docx");
    assert_eq!(normalize_extension(" docx "), "docx");
    assert_eq!(normalize_extension("docx"), "docx");
}

#[test]
fn test_output_path_replaces_extension() {
    assert_eq!(
        output_path_for(Path::new("novel/第一卷.txt"), Path::new("output"), "docx"),
        PathBuf::from("output/第一卷.docx")
    );
    assert_eq!(
        output_path_for(Path::new("novel/v1.2.txt"), Path::new("out"), "docx"),
        PathBuf::from("out/v1.2.docx")
    );
}

#[test]
fn test_temp_path_is_hidden_sibling() {
    let temp = temp_path_for(Path::new("output/a.docx"));
    assert_eq!(temp.parent(), Some(Path::new("output")));
    let name = temp.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with(".a.docx."), "{name}");
    assert!(name.ends_with(".tmp"), "{name}");
}

#[test]
fn test_os_hidden_files() {
    assert!(is_os_hidden_file(Path::new("x/.DS_Store")));
    assert!(is_os_hidden_file(Path::new("x/._chapter.txt")));
    assert!(is_os_hidden_file(Path::new("x/Thumbs.db")));
    assert!(!is_os_hidden_file(Path::new("x/chapter.txt")));
}

// --- discovery ---

#[test]
fn test_discover_sorted_flat_and_filtered() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["b.txt", "a.txt", "c.TXT", "d.md", "._e.txt"] {
        std::fs::write(dir.path().join(name), "x").unwrap();
    }
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("nested.txt"), "x").unwrap();

    let found: Vec<String> = discover_sources(dir.path(), "txt")
        .unwrap()
        .iter()
        .map(|s| s.display_name())
        .collect();
    assert_eq!(found, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_discover_missing_dir_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = discover_sources(&dir.path().join("nope"), "txt").unwrap_err();
    assert!(err.to_string().starts_with("Input directory '"));
}

// --- line splitting ---

#[test]
fn test_line_paragraphs_trims_and_drops_blank() {
    assert_eq!(line_paragraphs("  Hello  ").collect::<Vec<_>>(), vec!["Hello"]);
    assert!(line_paragraphs("   \t ").next().is_none());
    assert!(line_paragraphs("").next().is_none());
    assert_eq!(line_paragraphs("a\rb\r").collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        line_paragraphs("\u{3000}全角空格\u{3000}").collect::<Vec<_>>(),
        vec!["全角空格"]
    );
}

// --- xml ---

#[test]
fn test_escape_xml_text() {
    let mut out = String::new();
    escape_xml_text("a<b>&c\"d'", &mut out).unwrap();
    assert_eq!(out, "a&lt;b&gt;&amp;c\"d'");
}

#[test]
fn test_escape_rejects_control_chars() {
    let mut out = String::new();
    assert_eq!(escape_xml_text("ok\u{1}", &mut out), Err('\u{1}'));
    assert!(!is_xml_char('\u{0}'));
    assert!(!is_xml_char('\u{FFFE}'));
    assert!(is_xml_char('\t'));
    assert!(is_xml_char('字'));
    assert!(is_xml_char('\u{1F600}'));
}

#[test]
fn test_render_paragraph_spacing_and_tabs() {
    let mut out = String::new();
    render_paragraph("a\tb", &mut out).unwrap();
    assert_eq!(
        out,
        concat!(
            r#"<w:p><w:pPr><w:spacing w:after="120"/></w:pPr><w:r>"#,
            r#"<w:t xml:space="preserve">a</w:t><w:tab/><w:t xml:space="preserve">b</w:t>"#,
            "</w:r></w:p>"
        )
    );
}

// --- results / summary ---

#[test]
fn test_result_messages() {
    let ok = ConversionResult::Success {
        source: PathBuf::from("novel/a.txt"),
        output: PathBuf::from("output/a.docx"),
    };
    assert_eq!(ok.message(), "Successfully converted a.txt to a.docx");

    let err = ConversionResult::Failure {
        source: PathBuf::from("novel/b.txt"),
        error: ConvertError::InvalidText { line: 3, ch: '\u{0}' },
    };
    assert!(!err.is_success());
    assert!(err.message().starts_with("Error converting b.txt: line 3"));
}

#[test]
fn test_summary_record_and_lines() {
    let mut summary = RunSummary {
        total: 3,
        ..RunSummary::default()
    };
    let ok = ConversionResult::Success {
        source: PathBuf::from("a.txt"),
        output: PathBuf::from("a.docx"),
    };
    let bad = ConversionResult::Failure {
        source: PathBuf::from("b.txt"),
        error: ConvertError::InvalidText { line: 1, ch: '\u{1}' },
    };
    summary.record(&ok);
    summary.record(&ok);
    summary.record(&bad);
    summary.elapsed = Duration::from_millis(1234);

    assert_eq!(
        summary_lines(&summary),
        [
            "Successfully converted: 2".to_string(),
            "Failed to convert:     1".to_string(),
            "Total files processed: 3".to_string(),
            "Total time taken:      1.23 seconds".to_string(),
        ]
    );
}

// --- pool sizing ---

#[test]
fn test_pool_tuning_caps_to_job_count() {
    assert_eq!(pool_tuning(Some(8), 3).num_workers, 3);
    assert_eq!(pool_tuning(Some(2), 10).num_workers, 2);
    assert!(pool_tuning(None, 1000).num_workers >= 1);
}

#[test]
fn test_pool_tuning_floor_and_channel_cap() {
    let t = pool_tuning(None, 0);
    assert_eq!(t.num_workers, 1);
    assert_eq!(t.channel_cap, 1);
    assert_eq!(pool_tuning(Some(4), 50).channel_cap, 50);
}

// --- zip entry names ---

#[test]
fn test_entry_file_name() {
    assert_eq!(entry_file_name("a/b/c.txt"), Some("c.txt".to_string()));
    assert_eq!(entry_file_name("c.txt"), Some("c.txt".to_string()));
    assert_eq!(entry_file_name("win\\path\\d.txt"), Some("d.txt".to_string()));
    assert_eq!(entry_file_name("dir/"), None);
}

// --- config file + CLI precedence ---

const CONFIG: &str = r#"
[convert]
input_dir = "books"
output_dir = "docs"
workers = 3
output_extension = "docx"
progress = true

[unite]
output_name = "corpus.json"
"#;

#[test]
fn test_config_file_then_flags() {
    let file = parse_txtdocx_toml(CONFIG).unwrap();

    let cli = Cli::try_parse_from(["txtdocx", "convert", "-o", "elsewhere", "-j", "5"]).unwrap();
    let Commands::Convert(args) = cli.command else {
        panic!("expected convert");
    };
    let opts = convert_opts_from(&args, Some(&file));
    assert_eq!(opts.input_dir, PathBuf::from("books"));
    assert_eq!(opts.output_dir, PathBuf::from("elsewhere"));
    assert_eq!(opts.workers, Some(5));
    assert!(opts.progress);
    assert_eq!(opts.input_extension, "txt");
}

#[test]
fn test_defaults_without_config() {
    let cli = Cli::try_parse_from(["txtdocx", "convert"]).unwrap();
    let Commands::Convert(args) = cli.command else {
        panic!("expected convert");
    };
    let opts = convert_opts_from(&args, None);
    assert_eq!(opts.input_dir, PathBuf::from("novel"));
    assert_eq!(opts.output_dir, PathBuf::from("output"));
    assert_eq!(opts.workers, None);
    assert_eq!(opts.output_extension, "docx");
    assert!(!opts.progress);
}

#[test]
fn test_unite_opts_from_config_and_flags() {
    let file = parse_txtdocx_toml(CONFIG).unwrap();
    let cli = Cli::try_parse_from(["txtdocx", "unite", "-i", "zips", "-v"]).unwrap();
    let Commands::Unite(args) = cli.command else {
        panic!("expected unite");
    };
    let opts = unite_opts_from(&args, Some(&file));
    assert_eq!(opts.input_dir, PathBuf::from("zips"));
    assert_eq!(opts.output_name, "corpus.json");
    assert!(opts.verbose);
}

#[test]
fn test_zero_workers_rejected() {
    assert!(Cli::try_parse_from(["txtdocx", "convert", "-j", "0"]).is_err());
}

#[test]
fn test_load_config_missing_and_malformed() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(load_txtdocx_toml(dir.path(), None).unwrap().is_none());

    std::fs::write(dir.path().join(".txtdocx.toml"), "[convert]\nworkers = \"many\"\n").unwrap();
    assert!(load_txtdocx_toml(dir.path(), None).is_err());

    let explicit = dir.path().join("custom.toml");
    assert!(load_txtdocx_toml(dir.path(), Some(&explicit)).is_err());
    std::fs::write(&explicit, CONFIG).unwrap();
    assert!(load_txtdocx_toml(dir.path(), Some(&explicit)).unwrap().is_some());
}
