use shapealbum_core::{Album, FixedClock};

/// Album whose snapshots are stamped 16-10-2026 08:30:00
#[allow(dead_code)]
pub fn fixed_album() -> Album {
    let clock = FixedClock::at(2026, 10, 16, 8, 30, 0).expect("valid fixed time");
    Album::with_clock(Box::new(clock))
}

/// Album holding the two-shape fixture used across scenarios:
/// rectangle "R" and oval "O", both with defaults
#[allow(dead_code)]
pub fn album_with_r_and_o() -> Album {
    let mut album = fixed_album();
    album
        .add_shape("R", "rectangle")
        .expect("Should add rectangle");
    album.add_shape("O", "oval").expect("Should add oval");
    album
}

/// Names of the live shapes in registry order
#[allow(dead_code)]
pub fn live_names(album: &Album) -> Vec<String> {
    album
        .store()
        .list_shapes()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}
