//! The page-level controller.
//!
//! A [`Session`] owns everything the page shows: the preview sequence, the
//! one-shot "compressed" flag, and the slider percentage. It is created when
//! the page loads, reset by every new file selection, and dropped on
//! navigation. Both batch operations publish their result in a single
//! assignment, so a reader never sees a half-updated sequence.

use tracing::{info, warn};

use crate::compress::reencode_all;
use crate::config::SessionOptions;
use crate::error::CompressError;
use crate::preview::{CandidateFile, Download, PreviewItem};
use crate::quality::CompressPercent;

#[derive(Debug, Clone, Default)]
pub struct Session {
    previews: Vec<PreviewItem>,
    compressed: bool,
    percent: CompressPercent,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            previews: Vec::new(),
            compressed: false,
            percent: options.default_percent,
        }
    }

    pub fn previews(&self) -> &[PreviewItem] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    pub fn percent(&self) -> CompressPercent {
        self.percent
    }

    /// Move the slider. Values outside 1-100 are clamped; the stored value
    /// is returned.
    pub fn set_percent(&mut self, percent: u8) -> CompressPercent {
        self.percent = CompressPercent::new(percent);
        self.percent
    }

    pub fn quality_fraction(&self) -> f64 {
        self.percent.quality_fraction()
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The drop target is only offered while nothing is loaded.
    pub fn show_drop_zone(&self) -> bool {
        self.previews.is_empty()
    }

    pub fn can_compress(&self) -> bool {
        !self.previews.is_empty() && !self.compressed
    }

    /// Downloads are offered once the batch has been compressed.
    pub fn download_available(&self) -> bool {
        self.compressed
    }

    /// Load a new selection.
    ///
    /// Non-image files are skipped without comment. The remaining files
    /// replace the previews in input order and the compressed flag is
    /// cleared. Returns the number of previews now shown.
    pub fn intake<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = CandidateFile>,
    {
        let mut skipped = 0usize;
        let previews: Vec<PreviewItem> = files
            .into_iter()
            .filter(|file| {
                let keep = file.media_type.is_image();
                skipped += usize::from(!keep);
                keep
            })
            .map(PreviewItem::from)
            .collect();

        info!(accepted = previews.len(), skipped, "intake complete");

        self.previews = previews;
        self.compressed = false;
        self.previews.len()
    }

    /// Re-encode every preview at the current percentage.
    ///
    /// Runs at most once per selection. On any error the previews and the
    /// flag are left exactly as they were.
    pub fn compress(&mut self) -> Result<&[PreviewItem], CompressError> {
        if self.compressed {
            return Err(CompressError::AlreadyCompressed);
        }
        if self.previews.is_empty() {
            return Err(CompressError::NothingToCompress);
        }

        let fraction = self.quality_fraction();
        let compressed = reencode_all(&self.previews, fraction).inspect_err(|err| {
            warn!(error = %err, "compression abandoned");
        })?;

        let before: usize = self.previews.iter().map(PreviewItem::size).sum();
        let after: usize = compressed.iter().map(PreviewItem::size).sum();
        info!(
            items = compressed.len(),
            percent = self.percent.get(),
            fraction,
            before,
            after,
            "compression complete"
        );

        self.previews = compressed;
        self.compressed = true;
        Ok(&self.previews)
    }

    /// The current bytes and name of one preview, whether or not the batch
    /// has been compressed.
    pub fn download(&self, index: usize) -> Option<Download> {
        self.previews.get(index).map(Download::from)
    }
}
