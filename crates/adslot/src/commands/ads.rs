//! Ad command handlers.

use tabled::Tabled;

use adslot_core::form::{AdDraft, FullFormatDraft, MediaLedDraft, SubmitIntent};
use adslot_core::model::ad::PlacementKind;
use adslot_core::{Ad, AdStatus, FileUpload, Portal};

use crate::cli::{
    AdCategoryArg, AdStatusFilter, AdsArgs, AdsCommand, CreateAdArgs, GlobalOpts,
    PlacementKindArg,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct AdRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Impressions")]
    impressions: i64,
    #[tabled(rename = "Clicks")]
    clicks: i64,
}

impl From<&Ad> for AdRow {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id,
            title: ad.title.clone(),
            status: ad.status.to_string(),
            impressions: ad.total_impressions,
            clicks: ad.total_clicks,
        }
    }
}

fn ad_detail(ad: &Ad) -> String {
    let mut lines = vec![
        format!("Title:    {}", ad.title),
        format!("Status:   {}", ad.status),
    ];
    if let Some(ref category) = ad.category {
        lines.push(format!("Category: {category}"));
    }
    if let Some(ref short) = ad.short_description {
        lines.push(format!("Summary:  {short}"));
    }
    if let Some(ref url) = ad.website_url {
        lines.push(format!("Website:  {url}"));
    }
    if let Some(ref region) = ad.region {
        lines.push(format!("Region:   {region}"));
    }
    if let Some(ref reason) = ad.rejection_reason {
        lines.push(format!("Rejected: {reason}"));
    }
    lines.push(format!(
        "Clicks:   {} ({} impressions, {:.2}% CTR)",
        ad.total_clicks,
        ad.total_impressions,
        ad.click_through_rate()
    ));
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(portal: &Portal, args: AdsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AdsCommand::List { status } => {
            let ads = portal.list_ads(status.map(AdStatus::from)).await?;
            let out = output::render_list(
                &global.output,
                &ads,
                |r| AdRow::from(r),
                |ad| ad.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AdsCommand::Get { id } => {
            let ad = portal.get_ad(id).await?;
            let out = output::render_single(&global.output, &ad, ad_detail, |a| a.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AdsCommand::Create(create) => create_ad(portal, create, global).await,

        AdsCommand::Submit { id } => {
            let ad = portal.submit_ad_for_review(id).await?;
            if !global.quiet {
                eprintln!("Ad {} submitted for review (status: {})", ad.id, ad.status);
            }
            Ok(())
        }

        AdsCommand::Update {
            id,
            title,
            short_description,
            full_description,
            call_to_action,
            website_url,
            catalog_url,
            region,
        } => {
            let payload = adslot_api::types::AdPayload {
                title,
                short_description,
                full_description,
                call_to_action,
                website_url,
                catalog_url,
                region,
                ..Default::default()
            };
            let ad = portal.update_ad(id, &payload).await?;
            if !global.quiet {
                eprintln!("Ad {} updated", ad.id);
            }
            let out = output::render_single(&global.output, &ad, ad_detail, |a| a.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AdsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete ad {id}? This is permanent."), global.yes)? {
                return Ok(());
            }
            portal.delete_ad(id).await?;
            if !global.quiet {
                eprintln!("Ad deleted");
            }
            Ok(())
        }

        AdsCommand::Stats { id } => show_stats(portal, id, global).await,
    }
}

/// Create an ad: upload any media first, then create the record and
/// link the uploads. Per-file failures are reported, not fatal.
async fn create_ad(
    portal: &Portal,
    args: CreateAdArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let intent = if args.submit {
        SubmitIntent::SubmitForReview
    } else {
        SubmitIntent::SaveDraft
    };

    // Phase 1: upload the media batch.
    let mut uploaded_ids = Vec::new();
    if !args.files.is_empty() {
        let uploads = read_uploads(&args.files)?;
        let progress = (!global.quiet).then(|| {
            let bar = indicatif::ProgressBar::new(uploads.len() as u64);
            bar.set_message("uploading");
            bar
        });

        let report = portal.upload_files(uploads).await;
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        for (label, error) in report.failed() {
            eprintln!("upload failed: {label}: {error}");
        }
        uploaded_ids = report.into_successes().into_iter().map(|f| f.id).collect();
    }

    let draft = build_draft(&args, uploaded_ids);

    // Phase 2: create the ad and link the uploads.
    let submission = portal.create_ad(&draft, intent).await?;

    if !global.quiet {
        match intent {
            SubmitIntent::SubmitForReview => {
                eprintln!("Ad {} submitted for review", submission.ad.id);
            }
            SubmitIntent::SaveDraft => eprintln!("Ad {} saved as draft", submission.ad.id),
        }
        let report = &submission.link_report;
        if !report.is_empty() {
            eprintln!(
                "Linked {}/{} files",
                report.success_count(),
                report.len()
            );
            for (label, error) in report.failed() {
                eprintln!("link failed: file {label}: {error}");
            }
        }
    }

    let out = output::render_single(&global.output, &submission.ad, ad_detail, |a| {
        a.id.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

fn read_uploads(paths: &[std::path::PathBuf]) -> Result<Vec<FileUpload>, CliError> {
    paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)?;
            Ok(FileUpload {
                filename: util::file_name(path),
                content_type: util::guess_content_type(path).to_owned(),
                bytes,
            })
        })
        .collect()
}

fn build_draft(args: &CreateAdArgs, uploaded_file_ids: Vec<i64>) -> AdDraft {
    match args.category {
        AdCategoryArg::MediaLed => AdDraft::MediaLed(MediaLedDraft {
            title: args.title.clone(),
            short_description: args.short_description.clone().unwrap_or_default(),
            call_to_action: args.call_to_action.clone().unwrap_or_default(),
            website_url: args.website_url.clone().unwrap_or_default(),
            placement_kind: args.placement_kind.map(PlacementKind::from),
            region: args.region.clone().unwrap_or_default(),
            uploaded_file_ids,
        }),
        AdCategoryArg::FullFormat => AdDraft::FullFormat(FullFormatDraft {
            title: args.title.clone(),
            short_description: args.short_description.clone().unwrap_or_default(),
            full_description: args.full_description.clone().unwrap_or_default(),
            call_to_action: args.call_to_action.clone().unwrap_or_default(),
            website_url: args.website_url.clone().unwrap_or_default(),
            catalog_url: args.catalog_url.clone().unwrap_or_default(),
            terms_conditions: args.terms.clone().unwrap_or_default(),
        }),
    }
}

async fn show_stats(portal: &Portal, id: Option<i64>, global: &GlobalOpts) -> Result<(), CliError> {
    match id {
        Some(id) => {
            // Degrades to zeros when the analytics upstream is slow.
            let stats = portal.ad_statistics(id).await;
            let out = output::render_single(
                &global.output,
                &stats,
                |s| {
                    format!(
                        "Impressions: {}\nClicks:      {}\nCTR:         {:.2}%",
                        s.total_impressions, s.total_clicks, s.click_through_rate
                    )
                },
                |s| s.total_clicks.to_string(),
            );
            output::print_output(&out, global.quiet);
        }
        None => {
            let stats = portal.my_ad_statistics().await?;
            let out = output::render_single(
                &global.output,
                &stats,
                |s| {
                    format!(
                        "Ads:         {} ({} live)\nImpressions: {}\nClicks:      {}",
                        s.total_ads, s.live_ads, s.total_impressions, s.total_clicks
                    )
                },
                |s| s.total_ads.to_string(),
            );
            output::print_output(&out, global.quiet);
        }
    }
    Ok(())
}

// ── Arg enum conversions ────────────────────────────────────────────

impl From<AdStatusFilter> for AdStatus {
    fn from(f: AdStatusFilter) -> Self {
        match f {
            AdStatusFilter::Draft => Self::Draft,
            AdStatusFilter::PendingReview => Self::PendingReview,
            AdStatusFilter::Approved => Self::Approved,
            AdStatusFilter::Rejected => Self::Rejected,
            AdStatusFilter::Live => Self::Live,
            AdStatusFilter::Expired => Self::Expired,
            AdStatusFilter::Paused => Self::Paused,
        }
    }
}

impl From<PlacementKindArg> for PlacementKind {
    fn from(arg: PlacementKindArg) -> Self {
        match arg {
            PlacementKindArg::Main => Self::Main,
            PlacementKindArg::Regional => Self::Regional,
        }
    }
}
