/// Where the prize dataset lives and how to fetch it
#[derive(Debug, Clone)]
pub struct DatasetSettings {
    pub url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/kangjimoon/gisepa/main/esports_raw.csv",
            user_agent: "EsportsPlatformClusters/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClusteringSettings {
    /// Number of groups to partition countries into
    pub clusters: usize,
    /// Seed for centroid initialization
    pub seed: u64,
    /// Independent random initializations; best inertia wins
    pub n_init: usize,
    pub max_iterations: usize,
}

impl Default for ClusteringSettings {
    fn default() -> Self {
        Self {
            clusters: 4,
            seed: 42,
            n_init: 10,
            max_iterations: 300,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartSettings {
    pub title: &'static str,
    /// One color per cluster label, in label order
    pub palette: &'static [&'static str],
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "Esports Platform Ratio Clustering by Country",
            palette: &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub dataset: DatasetSettings,
    pub clustering: ClusteringSettings,
    pub chart: ChartSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_every_cluster_label() {
        let config = AppConfig::new();
        assert_eq!(config.chart.palette.len(), config.clustering.clusters);
    }
}
