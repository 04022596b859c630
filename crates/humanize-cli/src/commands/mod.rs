pub mod dashboard;
pub mod insight;
pub mod seats;
pub mod snapshot;
pub mod watch;

/// Render a zone row for plain-text seat listings.
pub fn format_zone(zone: &humanize_core::SeatZone) -> String {
    let shade = if zone.shaded { "shade on" } else { "shade off" };
    format!(
        "  {:<3} {:<20} {:<10} {}",
        zone.id,
        zone.label,
        zone.status().to_string(),
        shade
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanize_core::SeatBoard;

    #[test]
    fn format_zone_carries_id_label_and_status() {
        let board = SeatBoard::default();
        let line = format_zone(board.zone("B1").unwrap());
        assert!(line.contains("B1"));
        assert!(line.contains("Heritage Pavilion"));
        assert!(line.contains("folded"));
    }
}
