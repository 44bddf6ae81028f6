use crate::documents::ResultSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultSummary {
    pub total_docs: usize,
    pub tiled_count: usize,
    pub plain_count: usize,
    /// Sum of tile counts across all tiled documents.
    pub aggregate_tile_count: usize,
}

/// Counts for the current result set. Cheap enough to recompute on every view.
pub fn summarize(results: &ResultSet) -> ResultSummary {
    let tiled_count = results.tiled_documents.len();
    let plain_count = results.plain_documents.len();
    let aggregate_tile_count = results
        .tiled_documents
        .iter()
        .map(|doc| doc.tiles.len())
        .sum();
    ResultSummary {
        total_docs: tiled_count + plain_count,
        tiled_count,
        plain_count,
        aggregate_tile_count,
    }
}
