//! Loading the classifier and vectorizer artifacts from disk.
//!
//! Artifacts are read once. A `.json` path is parsed as the JSON export of
//! the trained objects, any other path as the bincode artifact.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use fakenews_preprocessing::{TfidfVectorizer, VectorizerError};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    Predictor,
    model::{Classifier, LinearClassifier, ModelError},
};

/// Default classifier artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model.bin";
/// Default vectorizer artifact, relative to the working directory.
pub const DEFAULT_VECTORIZER_PATH: &str = "vectorizer.bin";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vectorizer artifact {}", path.display())]
    Vectorizer {
        path: PathBuf,
        #[source]
        source: VectorizerError,
    },

    #[error("invalid classifier artifact {}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    #[error(
        "vectorizer produces {vectorizer} features but the classifier expects {classifier}"
    )]
    DimensionMismatch { vectorizer: usize, classifier: usize },
}

/// On-disk encoding of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Bincode,
    Json,
}

impl ArtifactFormat {
    /// Pick the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Bincode,
        }
    }
}

/// Where the two artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    #[must_use]
    pub fn new(model: impl Into<PathBuf>, vectorizer: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            vectorizer: vectorizer.into(),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH, DEFAULT_VECTORIZER_PATH)
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer, ArtifactError> {
    let format = ArtifactFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading vectorizer");
    let decoded = match format {
        ArtifactFormat::Json => TfidfVectorizer::from_json(&read_text(path)?),
        ArtifactFormat::Bincode => TfidfVectorizer::from_bytes(&read_bytes(path)?),
    };
    decoded.map_err(|source| ArtifactError::Vectorizer {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_classifier(path: &Path) -> Result<LinearClassifier, ArtifactError> {
    let format = ArtifactFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading classifier");
    let decoded = match format {
        ArtifactFormat::Json => LinearClassifier::from_json(&read_text(path)?),
        ArtifactFormat::Bincode => LinearClassifier::from_bytes(&read_bytes(path)?),
    };
    decoded.map_err(|source| ArtifactError::Model {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both artifacts and check that they agree on the feature dimension.
pub fn load(paths: &ArtifactPaths) -> Result<(LinearClassifier, TfidfVectorizer), ArtifactError> {
    let classifier = load_classifier(&paths.model)?;
    let vectorizer = load_vectorizer(&paths.vectorizer)?;

    if classifier.num_features() != vectorizer.num_features() {
        return Err(ArtifactError::DimensionMismatch {
            vectorizer: vectorizer.num_features(),
            classifier: classifier.num_features(),
        });
    }

    info!(
        model = %paths.model.display(),
        vectorizer = %paths.vectorizer.display(),
        num_features = vectorizer.num_features(),
        "Artifacts loaded"
    );
    Ok((classifier, vectorizer))
}

/// Load-once holder for the predictor built from a pair of artifacts.
///
/// The first successful [`ArtifactCache::get_or_load`] reads the files; every
/// later call hands out the same shared predictor. A failed load leaves the
/// cache empty.
#[derive(Debug)]
pub struct ArtifactCache {
    paths: ArtifactPaths,
    predictor: Mutex<Option<Arc<Predictor>>>,
}

impl ArtifactCache {
    #[must_use]
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            predictor: Mutex::new(None),
        }
    }

    pub fn get_or_load(&self) -> Result<Arc<Predictor>, ArtifactError> {
        let mut slot = self
            .predictor
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(predictor) = slot.as_ref() {
            return Ok(Arc::clone(predictor));
        }

        let predictor = Arc::new(Predictor::load(&self.paths)?);
        *slot = Some(Arc::clone(&predictor));
        Ok(predictor)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.predictor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    #[must_use]
    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }
}
