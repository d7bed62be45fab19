use serde::{Deserialize, Serialize};

/// Height classification for vinyl panels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeightBracket {
    Short,
    Medium,
    Tall,
}

/// Which edges of a vinyl panel get a canvas border
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanvasEdges {
    None,
    BottomOnly,
    TopAndBottom,
}

impl CanvasEdges {
    /// Number of canvas runs across the panel width
    pub fn count(&self) -> u32 {
        match self {
            CanvasEdges::None => 0,
            CanvasEdges::BottomOnly => 1,
            CanvasEdges::TopAndBottom => 2,
        }
    }
}

struct HeightBand {
    /// Upper bound in inches, inclusive; `None` means open-ended
    max_height_in: Option<i32>,
    bracket: HeightBracket,
    canvas: CanvasEdges,
}

/// Bracket decision table. Bands are ordered by ascending upper bound so
/// every height lands in exactly one band; the last band is open-ended.
const HEIGHT_BANDS: &[HeightBand] = &[
    HeightBand {
        max_height_in: Some(84),
        bracket: HeightBracket::Short,
        canvas: CanvasEdges::None,
    },
    HeightBand {
        max_height_in: Some(108),
        bracket: HeightBracket::Medium,
        canvas: CanvasEdges::BottomOnly,
    },
    HeightBand {
        max_height_in: None,
        bracket: HeightBracket::Tall,
        canvas: CanvasEdges::TopAndBottom,
    },
];

/// Classify a panel height into its bracket and canvas edge rule.
///
/// Callers validate the height first; this only assumes it is positive.
pub fn classify_height(height_in: f64) -> (HeightBracket, CanvasEdges) {
    for band in HEIGHT_BANDS {
        match band.max_height_in {
            Some(max) if height_in <= max as f64 => return (band.bracket, band.canvas),
            Some(_) => continue,
            None => return (band.bracket, band.canvas),
        }
    }
    unreachable!("height band table must end with an open-ended band")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(classify_height(36.0).0, HeightBracket::Short);
        assert_eq!(classify_height(84.0).0, HeightBracket::Short);
        assert_eq!(classify_height(84.5).0, HeightBracket::Medium);
        assert_eq!(classify_height(96.0).0, HeightBracket::Medium);
        assert_eq!(classify_height(108.0).0, HeightBracket::Medium);
        assert_eq!(classify_height(108.1).0, HeightBracket::Tall);
        assert_eq!(classify_height(240.0).0, HeightBracket::Tall);
    }

    #[test]
    fn test_canvas_edges_per_bracket() {
        assert_eq!(classify_height(60.0).1, CanvasEdges::None);
        assert_eq!(classify_height(96.0).1, CanvasEdges::BottomOnly);
        assert_eq!(classify_height(120.0).1, CanvasEdges::TopAndBottom);
    }

    #[test]
    fn test_every_height_maps_to_one_band() {
        // Sweep across the range in quarter-inch steps; classification must
        // be total and the bracket order must be monotonic in height.
        let mut last = HeightBracket::Short;
        let mut quarter_inches = 1;
        while quarter_inches <= 240 * 4 {
            let h = quarter_inches as f64 / 4.0;
            let (bracket, _) = classify_height(h);
            assert!(bracket >= last, "bracket regressed at {h}in");
            last = bracket;
            quarter_inches += 1;
        }
    }

    #[test]
    fn test_canvas_run_counts() {
        assert_eq!(CanvasEdges::None.count(), 0);
        assert_eq!(CanvasEdges::BottomOnly.count(), 1);
        assert_eq!(CanvasEdges::TopAndBottom.count(), 2);
    }
}
