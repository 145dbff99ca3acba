use crate::model::ContributionDay;

const FALLBACK_EDGES: [u32; 4] = [1, 2, 3, 4];

/// Maps a day's count onto one of five heatmap intensity levels.
///
/// Level 0 is reserved for zero. Nonzero counts land on the first edge they do
/// not exceed; the edges are the quartiles of the nonzero counts followed by
/// the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buckets {
    edges: [u32; 4],
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            edges: FALLBACK_EDGES,
        }
    }
}

impl Buckets {
    pub fn from_days(days: &[ContributionDay]) -> Self {
        let mut nonzero: Vec<u32> = days
            .iter()
            .map(|d| d.contribution_count)
            .filter(|&c| c > 0)
            .collect();
        if nonzero.is_empty() {
            return Self::default();
        }
        nonzero.sort_unstable();

        let quantile = |p: f64| {
            let idx = ((nonzero.len() as f64) * p).floor() as usize;
            nonzero[idx.min(nonzero.len() - 1)]
        };
        let max = nonzero[nonzero.len() - 1];

        Self {
            edges: [quantile(0.25), quantile(0.5), quantile(0.75), max],
        }
    }

    pub fn from_edges(edges: [u32; 4]) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> [u32; 4] {
        self.edges
    }

    pub fn level(&self, count: u32) -> u8 {
        if count == 0 {
            return 0;
        }
        self.edges[..3]
            .iter()
            .position(|&edge| count <= edge)
            .map(|i| i as u8 + 1)
            .unwrap_or(4)
    }
}
