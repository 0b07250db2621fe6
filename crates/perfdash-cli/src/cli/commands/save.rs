//! `perfdash save <file>` – save a local file through the download helper.

use anyhow::{Context, Result};
use perfdash_core::download::{download_blob, Blob, DownloadContent, FsDocument};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct SaveArgs {
    pub path: PathBuf,
    pub name: Option<String>,
    pub mime: Option<String>,
    pub text: bool,
    pub dir: PathBuf,
}

fn suggested_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn run_save(args: &SaveArgs) -> Result<()> {
    let content = if args.text {
        let text = fs::read_to_string(&args.path)
            .with_context(|| format!("read {}", args.path.display()))?;
        DownloadContent::Text(text)
    } else {
        let bytes = fs::read(&args.path).with_context(|| format!("read {}", args.path.display()))?;
        DownloadContent::Blob(Blob::new(bytes, args.mime.clone().unwrap_or_default()))
    };
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| suggested_name(&args.path));

    let mut doc = FsDocument::new(&args.dir)?;
    download_blob(&mut doc, content, &name, args.mime.as_deref())
        .with_context(|| format!("save {}", args.path.display()))?;

    for path in doc.saved_paths() {
        println!("Saved {}", path.display());
    }
    Ok(())
}
