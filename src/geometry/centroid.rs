/// Arithmetic mean of polygon boundary vertices, longitude and latitude
/// averaged independently.
///
/// This is the simple vertex centroid, not the area-weighted one; for
/// stand-sized polygons the difference is well below GPS accuracy, and it
/// matches what the historical converter wrote.
///
/// # Returns
/// * `None` when `coords` is empty
pub fn vertex_mean(coords: &[[f64; 2]]) -> Option<[f64; 2]> {
    if coords.is_empty() {
        return None;
    }

    let mut lon = 0.0;
    let mut lat = 0.0;
    for coord in coords {
        lon += coord[0];
        lat += coord[1];
    }

    let n = coords.len() as f64;
    Some([lon / n, lat / n])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_mean_two_points() {
        let center = vertex_mean(&[[-1.0, 51.0], [-1.0, 53.0]]).unwrap();
        assert_eq!(center, [-1.0, 52.0]);
    }

    #[test]
    fn test_vertex_mean_square() {
        let center = vertex_mean(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]).unwrap();
        assert_eq!(center, [1.0, 1.0]);
    }

    #[test]
    fn test_vertex_mean_empty() {
        assert_eq!(vertex_mean(&[]), None);
    }
}
