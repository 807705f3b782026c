//! File command handlers.

use tabled::Tabled;

use adslot_core::{FileUpload, Portal, UploadedFile};

use crate::cli::{FilesArgs, FilesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Filename")]
    filename: String,
    #[tabled(rename = "Type")]
    file_type: String,
    #[tabled(rename = "Size (KB)")]
    size: String,
    #[tabled(rename = "Scan")]
    scan: String,
    #[tabled(rename = "Ad")]
    ad: String,
}

impl From<&UploadedFile> for FileRow {
    fn from(f: &UploadedFile) -> Self {
        Self {
            id: f.id,
            filename: f.original_filename.clone(),
            file_type: f.file_type.clone().unwrap_or_default(),
            size: f.file_size_kb.map(|s| s.to_string()).unwrap_or_default(),
            scan: f.scan_status.to_string(),
            ad: f.ad_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(portal: &Portal, args: FilesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        FilesCommand::List => {
            let files = portal.list_files().await?;
            let out = output::render_list(
                &global.output,
                &files,
                |r| FileRow::from(r),
                |f| f.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FilesCommand::Upload { paths } => {
            let uploads: Vec<FileUpload> = paths
                .iter()
                .map(|path| {
                    let bytes = std::fs::read(path)?;
                    Ok(FileUpload {
                        filename: util::file_name(path),
                        content_type: util::guess_content_type(path).to_owned(),
                        bytes,
                    })
                })
                .collect::<Result<_, CliError>>()?;

            let report = portal.upload_files(uploads).await;

            if !global.quiet {
                eprintln!("Uploaded {}/{} files", report.success_count(), report.len());
            }
            for (label, error) in report.failed() {
                eprintln!("failed: {label}: {error}");
            }

            let uploaded = report.into_successes();
            let out = output::render_list(
                &global.output,
                &uploaded,
                |r| FileRow::from(r),
                |f| f.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FilesCommand::Link { file_id, ad } => {
            let report = portal.link_files(ad, &[file_id]).await;
            match report.failed().next() {
                Some((_, error)) => Err(CliError::ApiError {
                    message: error.to_string(),
                }),
                None => {
                    if !global.quiet {
                        eprintln!("File {file_id} linked to ad {ad}");
                    }
                    Ok(())
                }
            }
        }

        FilesCommand::Rm { id } => {
            if !util::confirm(&format!("Delete file {id}?"), global.yes)? {
                return Ok(());
            }
            portal.delete_file(id).await?;
            if !global.quiet {
                eprintln!("File deleted");
            }
            Ok(())
        }
    }
}
