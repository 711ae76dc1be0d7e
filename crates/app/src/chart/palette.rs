//! Default chart palette.

/// Line colors assigned to datasets by selection position.
///
/// Sixteen entries so a full fleet selection gets distinct colors before
/// the palette cycles.
pub const CHART_COLORS: [&str; 16] = [
    "#4a90e2", "#50c878", "#f39c12", "#e74c3c", "#9b59b6", "#3498db", "#2ecc71", "#f1c40f",
    "#e67e22", "#1abc9c", "#34495e", "#16a085", "#27ae60", "#2980b9", "#8e44ad", "#c0392b",
];
