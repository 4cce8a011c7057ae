use std::collections::HashMap;

use tracing::debug;

use super::surface::Surface;

/// Something that can draw an algorithm illustration onto a surface.
pub trait DetailRenderer {
    /// Stable identifier reported to the host.
    fn key(&self) -> &str;
    fn render(&self, surface: &mut Surface, width: f64, height: f64);
}

// ============================================================================
// Built-in registry: (display name, renderer key)
// ============================================================================

/// Leaf display names with a dedicated illustration, matched exactly.
pub const ALGORITHM_RENDERERS: &[(&str, &str)] = &[
    ("K-Means", "k-means"),
    ("Decision Trees", "decision-tree"),
    ("Linear Regression", "linear-regression"),
    ("Neural Networks", "neural-network"),
    ("kNN", "knn"),
    ("PCA", "pca"),
    ("Random Forests", "random-forest"),
    ("SVM", "svm"),
    ("Logistic Regression", "logistic-regression"),
    ("Naive Bayes", "naive-bayes"),
    ("Ridge/Lasso Regression", "ridge-lasso"),
    ("GBM / XGBoost", "xgboost"),
    ("Hierarchical Clustering", "hierarchical-clustering"),
    ("DBSCAN", "dbscan"),
    ("Gaussian Mixture Models", "gmm"),
    ("t-SNE", "tsne"),
    ("UMAP", "umap"),
    ("Autoencoders", "autoencoder"),
    ("ARIMA", "arima"),
    ("LSTM", "lstm"),
    ("Q-Learning", "q-learning"),
    ("GANs", "gan"),
    ("Variational Autoencoders (VAE)", "vae"),
    ("Isolation Forest", "isolation-forest"),
];

pub const PLACEHOLDER_KEY: &str = "placeholder";

/// Illustration drawn by the host's diagram library; the surface only records the delegation.
#[derive(Debug, Clone)]
pub struct HostRenderer {
    key: String,
}

impl HostRenderer {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl DetailRenderer for HostRenderer {
    fn key(&self) -> &str {
        &self.key
    }

    fn render(&self, surface: &mut Surface, _width: f64, _height: f64) {
        surface.delegate(&self.key);
    }
}

/// Fallback for algorithms without an illustration yet.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    algorithm: String,
}

impl PlaceholderRenderer {
    pub fn new(algorithm: &str) -> Self {
        Self { algorithm: algorithm.to_string() }
    }
}

impl DetailRenderer for PlaceholderRenderer {
    fn key(&self) -> &str {
        PLACEHOLDER_KEY
    }

    fn render(&self, surface: &mut Surface, width: f64, height: f64) {
        surface.text(width / 2.0, height / 2.0 - 20.0, &format!("Visualization for {}", self.algorithm), 18.0, "#999");
        surface.text(width / 2.0, height / 2.0 + 20.0, "coming soon!", 14.0, "#bbb");
    }
}

pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn DetailRenderer>>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self { renderers: HashMap::new() }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for &(name, key) in ALGORITHM_RENDERERS {
            registry.register(name, Box::new(HostRenderer::new(key)));
        }
        registry
    }

    /// Adds or replaces the renderer for an exact display name.
    pub fn register(&mut self, name: &str, renderer: Box<dyn DetailRenderer>) {
        self.renderers.insert(name.to_string(), renderer);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Draws `name`'s illustration onto `surface`, falling back to the
    /// placeholder. Returns the key of the renderer used.
    pub fn render(&self, name: &str, surface: &mut Surface) -> String {
        let (width, height) = (surface.width, surface.height);
        match self.renderers.get(name) {
            Some(renderer) => {
                debug!(algorithm = name, renderer = renderer.key(), "detail renderer dispatched");
                renderer.render(surface, width, height);
                renderer.key().to_string()
            }
            None => {
                debug!(algorithm = name, "no detail renderer registered, using placeholder");
                let placeholder = PlaceholderRenderer::new(name);
                placeholder.render(surface, width, height);
                placeholder.key().to_string()
            }
        }
    }
}
