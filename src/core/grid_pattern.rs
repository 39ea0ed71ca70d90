//! Animated grid pattern
//!
//! A lined grid with a handful of highlighted cells. Each highlighted square
//! fades in and out once, then jumps to another random cell.

use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct GridPatternConfig {
    /// Cell width in pixels
    pub cell_width: f64,
    /// Cell height in pixels
    pub cell_height: f64,
    pub num_squares: usize,
    pub max_opacity: f64,
    /// Seconds for one fade (in or out)
    pub duration: f64,
}

impl Default for GridPatternConfig {
    fn default() -> Self {
        Self {
            cell_width: 40.0,
            cell_height: 40.0,
            num_squares: 50,
            max_opacity: 0.5,
            duration: 4.0,
        }
    }
}

impl GridPatternConfig {
    pub fn num_squares(mut self, count: usize) -> Self {
        self.num_squares = count;
        self
    }

    pub fn max_opacity(mut self, opacity: f64) -> Self {
        self.max_opacity = opacity;
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }
}

/// One highlighted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub id: usize,
    pub col: u32,
    pub row: u32,
    /// Bumped on every move so the view can restart the animation
    pub generation: u32,
}

/// Pixel rectangle of a square inside the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct GridPattern {
    config: GridPatternConfig,
    width: f64,
    height: f64,
    squares: Vec<Square>,
}

impl GridPattern {
    /// Squares start in the top-left cell until the first resize
    pub fn new(config: GridPatternConfig) -> Self {
        let squares = (0..config.num_squares)
            .map(|id| Square {
                id,
                col: 0,
                row: 0,
                generation: 0,
            })
            .collect();
        Self {
            config,
            width: 0.0,
            height: 0.0,
            squares,
        }
    }

    pub fn config(&self) -> &GridPatternConfig {
        &self.config
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    fn random_cell(&self, rng: &mut impl Rng) -> (u32, u32) {
        let col = (rng.gen_range(0.0..1.0) * self.width / self.config.cell_width).floor();
        let row = (rng.gen_range(0.0..1.0) * self.height / self.config.cell_height).floor();
        (col as u32, row as u32)
    }

    /// Record new container dimensions and scatter every square again.
    /// A zero-sized container keeps the current squares.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        for i in 0..self.squares.len() {
            let (col, row) = self.random_cell(rng);
            let square = &mut self.squares[i];
            square.col = col;
            square.row = row;
            square.generation = square.generation.wrapping_add(1);
        }
    }

    /// Move a square whose fade cycle completed to a fresh random cell
    pub fn reposition(&mut self, id: usize, rng: &mut impl Rng) -> bool {
        if id >= self.squares.len() {
            return false;
        }
        let (col, row) = self.random_cell(rng);
        let square = &mut self.squares[id];
        square.col = col;
        square.row = row;
        square.generation = square.generation.wrapping_add(1);
        true
    }

    /// Drawn rectangle, inset by one pixel so grid lines stay visible
    pub fn rect(&self, square: &Square) -> SquareRect {
        SquareRect {
            x: square.col as f64 * self.config.cell_width + 1.0,
            y: square.row as f64 * self.config.cell_height + 1.0,
            width: self.config.cell_width - 1.0,
            height: self.config.cell_height - 1.0,
        }
    }

    /// Stagger of the fade animation for the square at `index`, in seconds
    pub fn delay(index: usize) -> f64 {
        index as f64 * 0.1
    }

    /// SVG path of one grid cell outline
    pub fn cell_path(&self) -> String {
        format!(
            "M.5 {}V.5H{}",
            self.config.cell_height, self.config.cell_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_new_pattern_has_configured_square_count() {
        let pattern = GridPattern::new(GridPatternConfig::default().num_squares(60));
        assert_eq!(pattern.squares().len(), 60);
        assert!(pattern.squares().iter().all(|s| s.col == 0 && s.row == 0));
    }

    #[test]
    fn test_resize_places_squares_inside_grid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut pattern = GridPattern::new(GridPatternConfig::default());
        pattern.resize(400.0, 200.0, &mut rng);

        for square in pattern.squares() {
            assert!(square.col < 10);
            assert!(square.row < 5);
            assert_eq!(square.generation, 1);
        }
    }

    #[test]
    fn test_zero_size_resize_keeps_squares() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut pattern = GridPattern::new(GridPatternConfig::default());
        pattern.resize(0.0, 300.0, &mut rng);
        assert!(pattern.squares().iter().all(|s| s.generation == 0));
    }

    #[test]
    fn test_reposition_only_touches_one_square() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut pattern = GridPattern::new(GridPatternConfig::default().num_squares(3));
        pattern.resize(800.0, 800.0, &mut rng);

        assert!(pattern.reposition(1, &mut rng));
        let generations: Vec<_> = pattern.squares().iter().map(|s| s.generation).collect();
        assert_eq!(generations, vec![1, 2, 1]);

        assert!(!pattern.reposition(99, &mut rng));
    }

    #[test]
    fn test_rect_is_inset_by_one_pixel() {
        let pattern = GridPattern::new(GridPatternConfig::default());
        let square = Square {
            id: 0,
            col: 2,
            row: 3,
            generation: 0,
        };
        let rect = pattern.rect(&square);
        assert_eq!(rect.x, 81.0);
        assert_eq!(rect.y, 121.0);
        assert_eq!(rect.width, 39.0);
        assert_eq!(rect.height, 39.0);
    }

    #[test]
    fn test_delay_and_path() {
        assert_eq!(GridPattern::delay(0), 0.0);
        assert!((GridPattern::delay(5) - 0.5).abs() < f64::EPSILON);
        let pattern = GridPattern::new(GridPatternConfig::default());
        assert_eq!(pattern.cell_path(), "M.5 40V.5H40");
    }
}
