use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::extract::{extract_samples, sample_filename};
use crate::fetch::Fetch;
use crate::identity::PuzzleIdentity;
use crate::notebook;

/// Answers the overwrite question when a day folder already exists.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Workspace committed. Input and samples may be missing when a fetch
    /// failed after the folder and worksheet were written.
    Created(PathBuf),
    /// Existing folder kept as-is, nothing written.
    Aborted,
}

/// Creates one workspace folder per puzzle and commits its artifacts:
/// the worksheet notebook, `input.txt`, and the numbered sample files.
/// Already-written artifacts are never rolled back.
pub struct Initializer<F, P> {
    fetcher: F,
    prompt: P,
    root: PathBuf,
}

impl<F: Fetch, P: Prompt> Initializer<F, P> {
    pub fn new(fetcher: F, prompt: P, root: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            prompt,
            root: root.into(),
        }
    }

    pub async fn run(&mut self, identity: &PuzzleIdentity) -> Result<Outcome> {
        let folder_name = identity.folder_name();
        let folder = self.root.join(&folder_name);

        if folder.exists() {
            let message =
                format!("Folder '{folder_name}' already exists. Delete and recreate? (y/n): ");
            if !self.prompt.confirm(&message)? {
                println!("Aborted.");
                return Ok(Outcome::Aborted);
            }
            fs::remove_dir_all(&folder)
                .with_context(|| format!("failed to remove {}", folder.display()))?;
        }

        fs::create_dir_all(&folder)
            .with_context(|| format!("failed to create {}", folder.display()))?;
        println!("Created folder: {folder_name}");

        // Without the worksheet the workspace is useless, so this is fatal.
        let notebook_path = folder.join(identity.notebook_name());
        fs::write(&notebook_path, notebook::generate(identity).to_json()?)
            .with_context(|| format!("failed to write {}", notebook_path.display()))?;
        println!("Created notebook: {}", notebook_path.display());

        // Input and samples are fetched after the workspace is committed;
        // a failure here is printed and leaves a partial workspace behind.
        if let Err(err) = self.fetch_artifacts(identity, &folder).await {
            println!("{err:#}");
        }

        Ok(Outcome::Created(folder))
    }

    async fn fetch_artifacts(&self, identity: &PuzzleIdentity, folder: &Path) -> Result<()> {
        let input = self.fetcher.fetch_input(identity).await?;
        let input_path = folder.join("input.txt");
        fs::write(&input_path, input.trim())
            .with_context(|| format!("failed to write {}", input_path.display()))?;
        println!("Fetched input and saved to: {}", input_path.display());

        if let Some(html) = self.fetcher.fetch_description(identity).await? {
            for (index, sample) in extract_samples(&html).into_iter().enumerate() {
                let filename = sample_filename(index);
                fs::write(folder.join(&filename), sample)
                    .with_context(|| format!("failed to write {filename}"))?;
                println!("Saved sample to: {filename}");
            }
        }

        Ok(())
    }
}
