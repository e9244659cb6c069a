use crate::color::Color;
use crate::names::{ColorModel, NamedColor};

/// Find the named color closest to `color` in the table selected by `model`.
///
/// Distance is squared Euclidean distance in RGB. Ties go to the entry that
/// comes first in the table, and the tables are sorted by name, so the
/// alphabetically smallest name wins (`aqua` over `cyan`, `gray` over `grey`).
pub fn find_closest_color(color: Color, model: ColorModel) -> &'static NamedColor {
    let names = model.names();
    let mut best = &names[0];
    let mut best_distance = u32::MAX;
    for named in names {
        let distance = color.distance_sq(named.color);
        if distance < best_distance {
            best = named;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    best
}
