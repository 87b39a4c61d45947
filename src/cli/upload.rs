use super::UploadArgs;
use crate::client::{load_file, RelayClient, SubmitOutcome, UploadForm};
use crate::Config;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

const BAR_WIDTH: usize = 40;

pub async fn run(config_path: Option<&Path>, args: UploadArgs) -> Result<()> {
    let config = Config::load(config_path)?;
    let relay_url = args.relay_url.unwrap_or(config.client.relay_url);
    let client = RelayClient::new(relay_url)?;

    let mut form = UploadForm::new();
    form.set_title(args.title.unwrap_or_default());
    form.set_description(args.description.unwrap_or_default());

    if let Some(path) = &args.file {
        let file = load_file(path)
            .await
            .with_context(|| format!("Could not read '{}'", path.display()))?;
        form.select_file(Some(file));
    }

    let mut progress = form.subscribe_progress();
    let renderer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let percentage = *progress.borrow_and_update();
            if percentage > 0 {
                draw_bar(percentage);
            }
        }
    });

    let outcome = form.submit(&client).await;
    renderer.abort();
    eprintln!();

    println!("{}", form.message());
    match outcome {
        SubmitOutcome::Uploaded(result) => {
            if let Some(hash) = result.ipfs_hash {
                println!("IPFS hash: {}", hash);
            }
            Ok(())
        }
        SubmitOutcome::Failed(err) => Err(err).context("Upload failed"),
        SubmitOutcome::Blocked => anyhow::bail!("No file given"),
    }
}

fn draw_bar(percentage: u8) {
    let filled = BAR_WIDTH * percentage as usize / 100;
    let mut stderr = std::io::stderr();
    let _ = write!(
        stderr,
        "\r[{}{}] {:>3}%",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        percentage
    );
    let _ = stderr.flush();
}
