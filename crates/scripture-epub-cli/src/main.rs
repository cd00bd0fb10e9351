use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use scripture_epub_config::ExportConfig;
use scripture_epub_engine::{DocSetState, MemorySink, SourceDocument, render_doc_set};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scripture-epub-cli")]
#[command(version, about = "Render scripture markup events to EPUB XHTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    scripture-epub-cli render --input books.json
    scripture-epub-cli render --config export.toml --input books.json --out build/")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a JSON list of documents into XHTML files
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Export configuration (defaults to ~/.config/scripture-epub/config.toml)
    #[arg(short, long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// JSON file holding the documents and their event streams
    #[arg(short, long, value_name = "JSON")]
    input: PathBuf,

    /// Output directory, overriding the configured one
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,
}

/// What one render run produced.
#[derive(Debug, Default)]
struct RenderSummary {
    written: Vec<PathBuf>,
    failed: Vec<String>,
    warnings: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Render(args) => render(&args),
    };

    match result {
        Ok(summary) if summary.failed.is_empty() => ExitCode::SUCCESS,
        Ok(summary) => {
            log::error!("{} document(s) failed: {}", summary.failed.len(), summary.failed.join(", "));
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn render(args: &RenderArgs) -> Result<RenderSummary> {
    let config = load_config(args.config.as_deref())?;
    let out_dir = match (&args.out, &config) {
        (Some(out), _) => out.clone(),
        (None, Some(config)) => config.output_dir.clone(),
        (None, None) => bail!("No output directory: pass --out or set output_dir in the config"),
    };
    let render_config = match &config {
        Some(config) => config.render_config()?,
        None => Default::default(),
    };

    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input {}", args.input.display()))?;
    let documents: Vec<SourceDocument> = serde_json::from_str(&input)
        .with_context(|| format!("Failed to parse documents in {}", args.input.display()))?;
    log::info!("Rendering {} document(s) from {}", documents.len(), args.input.display());

    let sink = Arc::new(MemorySink::new());
    let doc_set = DocSetState::new(sink.clone());
    let results = render_doc_set(&documents, &render_config, &doc_set);

    let mut summary = RenderSummary::default();
    for (book_code, result) in results {
        if result.is_err() {
            summary.failed.push(book_code);
        }
    }
    for (key, markup) in sink.drain() {
        summary.written.push(write_document(&out_dir, &key, &markup)?);
    }

    for (book_code, titles) in doc_set.all_titles() {
        log::info!("{book_code}: {} ({})", titles.long, titles.abbreviation);
    }
    let entries = doc_set.log_entries();
    summary.warnings = entries.len();
    if !entries.is_empty() {
        log::info!("{} warning(s) while rendering", entries.len());
    }
    log::info!("Wrote {} file(s) to {}", summary.written.len(), out_dir.display());

    Ok(summary)
}

fn load_config(path: Option<&Path>) -> Result<Option<ExportConfig>> {
    let config_path = path.map_or_else(ExportConfig::config_path, Path::to_path_buf);
    let config = ExportConfig::load_from_path(&config_path)?;
    match (&config, path) {
        (None, Some(_)) => bail!("Config file {} not found", config_path.display()),
        (None, None) => log::info!("No config at {}, using defaults", config_path.display()),
        (Some(_), _) => log::info!("Config path: {}", config_path.display()),
    }
    Ok(config)
}

fn write_document(out_dir: &Path, key: &str, markup: &str) -> Result<PathBuf> {
    let path = out_dir.join(key);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, markup).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOCUMENTS: &str = r#"[
        {
            "headers": { "bookCode": "MRK", "h": "Mark", "toc": "The Gospel of Mark", "toc3": "Mk" },
            "events": [
                { "kind": "documentStart" },
                { "kind": "blockStart", "payload": "blockTag/p" },
                { "kind": "scope", "subType": "start", "payload": "span/zz" },
                { "kind": "token", "subType": "wordLike", "payload": "Beginning" },
                { "kind": "blockEnd", "payload": "blockTag/p" },
                { "kind": "sequenceEnd" }
            ]
        },
        {
            "headers": { "bookCode": "BRK" },
            "events": [ { "kind": "documentStart" } ]
        }
    ]"#;

    fn args(dir: &TempDir, config: Option<PathBuf>, out: Option<PathBuf>) -> RenderArgs {
        let input = dir.path().join("documents.json");
        std::fs::write(&input, DOCUMENTS).unwrap();
        RenderArgs { config, input, out }
    }

    #[test]
    fn test_render_writes_documents_under_their_keys() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("export.toml");
        std::fs::write(&config, "output_dir = \"/nonexistent\"\n").unwrap();
        let out = dir.path().join("out");

        let summary = render(&args(&dir, Some(config), Some(out.clone()))).unwrap();

        let written = out.join("OEBPS/XHTML/MRK/MRK.xhtml");
        assert_eq!(summary.written, vec![written.clone()]);
        assert_eq!(summary.failed, vec!["BRK".to_string()]);
        assert_eq!(summary.warnings, 1);
        let markup = std::fs::read_to_string(written).unwrap();
        assert!(markup.contains("<div class=\"p\">Beginning</div>"));
    }

    #[test]
    fn test_output_dir_comes_from_config() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("configured");
        let config = dir.path().join("export.toml");
        std::fs::write(
            &config,
            format!("output_dir = {:?}\n[render]\ntext_direction = \"rtl\"\n", out.display().to_string()),
        )
        .unwrap();

        render(&args(&dir, Some(config), None)).unwrap();

        let markup = std::fs::read_to_string(out.join("OEBPS/XHTML/MRK/MRK.xhtml")).unwrap();
        assert!(markup.contains("dir=\"rtl\""));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = render(&args(&dir, Some(missing), Some(dir.path().join("out"))))
            .err()
            .unwrap();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_input_reports_the_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, "{ not json").unwrap();
        let args = RenderArgs {
            config: None,
            input: input.clone(),
            out: Some(dir.path().join("out")),
        };

        let err = render(&args).err().unwrap();
        assert!(err.to_string().contains("broken.json"));
    }
}
