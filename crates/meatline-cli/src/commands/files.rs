//! File upload command handlers.

use std::path::Path;

use meatline_api::{ApiClient, UploadSource};

use crate::cli::{FilesArgs, FilesCommand, GlobalOpts};
use crate::error::CliError;

async fn read_source(path: &Path) -> Result<UploadSource, CliError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload.bin".to_owned(), |n| n.to_string_lossy().into_owned());
    Ok(UploadSource {
        file_name,
        bytes,
        content_type: None,
    })
}

pub async fn handle(
    client: &ApiClient,
    args: FilesArgs,
    _global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FilesCommand::Upload { paths } => {
            let mut sources = Vec::with_capacity(paths.len());
            for path in &paths {
                sources.push(read_source(path).await?);
            }

            let files = client.upload_files(sources).await?;
            for file in &files {
                println!(
                    "{}  {}  {}",
                    file.id,
                    file.name.as_deref().unwrap_or("-"),
                    file.url
                );
            }
            Ok(())
        }
    }
}
