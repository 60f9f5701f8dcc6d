//! Decomposed-plot curve clicks resolved back to record indices.
//!
//! When the simulated spectrum is decomposed, each plotted curve belongs to
//! one record; the backend supplies a per-method mapping from curve number
//! to record index.

/// Resolve a clicked curve to a record index, or `None` when the click
/// cannot select anything: decomposition off, curve outside the record
/// list, no mapping for the active method, or a mapped index that has gone
/// stale against the current list length.
#[must_use]
pub fn resolve_curve_click(
    curve: usize,
    decompose: bool,
    map: &[Vec<usize>],
    method_index: usize,
    len: usize,
) -> Option<usize> {
    if !decompose || curve >= len {
        return None;
    }
    let mapped = map.get(method_index)?.get(curve).copied()?;
    (mapped < len).then_some(mapped)
}
