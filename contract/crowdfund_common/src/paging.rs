/// Bounds of the page `offset..offset + limit` within `total` entries,
/// clamped to what exists. `None` when the page is empty.
pub fn page_bounds(total: u32, offset: u32, limit: u32) -> Option<(u32, u32)> {
    if offset >= total || limit == 0 {
        return None;
    }
    let end = offset.saturating_add(limit).min(total);
    Some((offset, end))
}
