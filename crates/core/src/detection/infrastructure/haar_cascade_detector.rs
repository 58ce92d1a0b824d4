use std::path::{Path, PathBuf};

use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use thiserror::Error;

use crate::detection::domain::region_detector::{DetectParams, RegionDetector};
use crate::shared::region::Region;

#[derive(Error, Debug)]
pub enum CascadeLoadError {
    #[error("failed to load cascade {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
    #[error("cascade {path} is empty or could not be parsed")]
    Empty { path: PathBuf },
}

/// Pre-trained Haar-cascade detector backed by
/// `opencv::objdetect::CascadeClassifier`.
///
/// The classifier is loaded once at startup and persists for the process
/// lifetime; detection is stateless per call.
pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
}

impl HaarCascadeDetector {
    /// Loads a cascade definition, failing if the file cannot be parsed
    /// into a usable classifier.
    pub fn open(path: &Path) -> Result<Self, CascadeLoadError> {
        let path_str = path.to_string_lossy().into_owned();

        let mut classifier = CascadeClassifier::default().map_err(|source| {
            CascadeLoadError::Load {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let loaded = classifier.load(&path_str).map_err(|source| {
            CascadeLoadError::Load {
                path: path.to_path_buf(),
                source,
            }
        })?;
        if !loaded {
            return Err(CascadeLoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        log::info!("loaded cascade {}", path.display());
        Ok(Self { classifier })
    }
}

impl RegionDetector for HaarCascadeDetector {
    fn detect(
        &mut self,
        image: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let mut hits = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            image,
            &mut hits,
            params.scale_factor,
            params.min_neighbors,
            0,
            Size::new(params.min_size.0, params.min_size.1),
            Size::new(0, 0),
        )?;

        Ok(hits
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}
