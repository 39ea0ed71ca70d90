//! Fluid particle field behind the landing hero
//!
//! Particles rest at a random base position, get pushed away from the
//! pointer, spring back with friction, and are thrown outwards by a click
//! "blast". The browser component feeds input and draws; everything here is
//! deterministic given the RNG.

use rand::Rng;

/// Velocity multiplier applied every step
pub const FRICTION: f64 = 0.92;
/// Pull back towards the base position
pub const SPRING: f64 = 0.04;
/// Push away from the pointer
pub const REPULSION: f64 = 0.7;
/// Push away from a blast centre
pub const BLAST_FORCE: f64 = 7.0;
/// Time for a blast to reach its full radius
pub const BLAST_EXPAND_MS: f64 = 180.0;
/// Time a blast stays active after reaching full radius
pub const BLAST_LINGER_MS: f64 = 40.0;
/// Fill colour of particles caught in a blast
pub const BLAST_COLOR: &str = "rgba(180, 100, 255, 0.7)";

/// Tunables of a particle field
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Screen area per particle; higher means fewer particles
    pub density: f64,
    pub particle_size: f64,
    pub particle_color: String,
    pub active_color: String,
    pub max_blast_radius: f64,
    pub interaction_distance: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            density: 200.0,
            particle_size: 1.0,
            particle_color: "#333333".to_string(),
            active_color: "#8b5cf6".to_string(),
            max_blast_radius: 180.0,
            interaction_distance: 40.0,
        }
    }
}

impl ParticleConfig {
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn particle_size(mut self, size: f64) -> Self {
        self.particle_size = size;
        self
    }

    pub fn colors(mut self, particle: impl Into<String>, active: impl Into<String>) -> Self {
        self.particle_color = particle.into();
        self.active_color = active.into();
        self
    }

    pub fn max_blast_radius(mut self, radius: f64) -> Self {
        self.max_blast_radius = radius;
        self
    }

    pub fn interaction_distance(mut self, distance: f64) -> Self {
        self.interaction_distance = distance;
        self
    }

    /// Number of particles for a viewport
    pub fn count_for(&self, width: f64, height: f64) -> usize {
        if self.density <= 0.0 || width <= 0.0 || height <= 0.0 {
            return 0;
        }
        ((width * height) / self.density).floor() as usize
    }
}

/// Which colour a particle is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Resting,
    Active,
    Blast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub base_x: f64,
    pub base_y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    pub tint: Tint,
}

impl Particle {
    fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            base_x: x,
            base_y: y,
            size,
            vx: 0.0,
            vy: 0.0,
            tint: Tint::Resting,
        }
    }
}

/// Expanding ring started by a click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blast {
    pub x: f64,
    pub y: f64,
    pub max_radius: f64,
    started_at: f64,
}

impl Blast {
    pub fn new(x: f64, y: f64, max_radius: f64, now_ms: f64) -> Self {
        Self {
            x,
            y,
            max_radius,
            started_at: now_ms,
        }
    }

    /// Radius at `now_ms`, eased out with `p * (2 - p)`
    pub fn radius_at(&self, now_ms: f64) -> f64 {
        let progress = ((now_ms - self.started_at) / BLAST_EXPAND_MS).clamp(0.0, 1.0);
        progress * (2.0 - progress) * self.max_radius
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        now_ms - self.started_at < BLAST_EXPAND_MS + BLAST_LINGER_MS
    }
}

/// All particles of one canvas
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
    blast: Option<Blast>,
    frame: u64,
    needs_update: bool,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            config,
            particles: Vec::new(),
            pointer: None,
            blast: None,
            frame: 0,
            needs_update: false,
            width,
            height,
        };
        field.resize(width, height, rng);
        field
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Re-seed every particle for a new viewport size
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        let count = self.config.count_for(width, height);
        let max_size = self.config.particle_size;
        self.particles = (0..count)
            .map(|_| {
                let x = rng.gen_range(0.0..1.0) * width;
                let y = rng.gen_range(0.0..1.0) * height;
                let size = rng.gen_range(0.0..1.0) * max_size + 0.5;
                Particle::new(x, y, size)
            })
            .collect();
        self.needs_update = true;
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
        self.needs_update = true;
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.needs_update = true;
    }

    pub fn trigger_blast(&mut self, x: f64, y: f64, now_ms: f64) {
        self.blast = Some(Blast::new(x, y, self.config.max_blast_radius, now_ms));
        self.needs_update = true;
    }

    pub fn blast(&self) -> Option<&Blast> {
        self.blast.as_ref()
    }

    /// Fill colour for a particle
    pub fn color_of(&self, particle: &Particle) -> &str {
        match particle.tint {
            Tint::Resting => &self.config.particle_color,
            Tint::Active => &self.config.active_color,
            Tint::Blast => BLAST_COLOR,
        }
    }

    /// Advance one animation frame.
    ///
    /// Only every second frame is simulated unless input arrived since the
    /// last step. Returns whether the particles moved and need a redraw.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.frame = self.frame.wrapping_add(1);
        if self.frame % 2 != 0 && !self.needs_update {
            return false;
        }
        self.needs_update = false;

        if self.blast.is_some_and(|b| !b.is_active(now_ms)) {
            self.blast = None;
        }
        let blast = self.blast.map(|b| (b, b.radius_at(now_ms)));
        let reach = self.config.interaction_distance;

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vx *= FRICTION;
            p.vy *= FRICTION;

            let near = self.pointer.and_then(|(mx, my)| {
                let dx = mx - p.x;
                let dy = my - p.y;
                let distance = (dx * dx + dy * dy).sqrt();
                (distance < reach).then_some((dx, dy, distance))
            });

            match near {
                Some((dx, dy, distance)) => {
                    let force = (reach - distance) / reach;
                    let norm = if distance == 0.0 { 1.0 } else { distance };
                    p.vx -= dx / norm * force * REPULSION;
                    p.vy -= dy / norm * force * REPULSION;
                    p.tint = Tint::Active;
                }
                None => {
                    p.vx += (p.base_x - p.x) * SPRING;
                    p.vy += (p.base_y - p.y) * SPRING;
                    p.tint = Tint::Resting;
                }
            }

            if let Some((b, radius)) = blast {
                let dx = p.x - b.x;
                let dy = p.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < radius {
                    let norm = if distance == 0.0 { 1.0 } else { distance };
                    let force = (radius - distance) / radius;
                    p.vx += dx / norm * force * BLAST_FORCE;
                    p.vy += dy / norm * force * BLAST_FORCE;
                    p.tint = Tint::Blast;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn single(x: f64, y: f64) -> ParticleField {
        let mut field = ParticleField::new(ParticleConfig::default(), 0.0, 0.0, &mut rng());
        field.particles = vec![Particle::new(x, y, 1.0)];
        field
    }

    #[test]
    fn test_particle_count_follows_density() {
        let config = ParticleConfig::default().density(300.0);
        assert_eq!(config.count_for(300.0, 100.0), 100);
        assert_eq!(config.count_for(0.0, 100.0), 0);

        let field = ParticleField::new(config, 300.0, 100.0, &mut rng());
        assert_eq!(field.particles().len(), 100);
    }

    #[test]
    fn test_particles_spawn_inside_viewport() {
        let field = ParticleField::new(ParticleConfig::default(), 400.0, 300.0, &mut rng());
        for p in field.particles() {
            assert!((0.0..400.0).contains(&p.x));
            assert!((0.0..300.0).contains(&p.y));
            assert!(p.size >= 0.5 && p.size < 1.5);
            assert_eq!((p.x, p.y), (p.base_x, p.base_y));
        }
    }

    #[test]
    fn test_resize_reseeds() {
        let mut r = rng();
        let mut field = ParticleField::new(ParticleConfig::default(), 200.0, 200.0, &mut r);
        field.resize(400.0, 200.0, &mut r);
        assert_eq!(field.particles().len(), 400);
        assert_eq!(field.size(), (400.0, 200.0));
    }

    #[test]
    fn test_frame_skip_without_input() {
        let mut field = single(10.0, 10.0);
        field.needs_update = false;

        // Odd frames are skipped, even frames simulate.
        assert!(!field.tick(0.0));
        assert!(field.tick(16.0));
        assert!(!field.tick(32.0));

        field.pointer_moved(500.0, 500.0);
        assert!(field.tick(48.0));
    }

    #[test]
    fn test_pointer_repels_and_tints() {
        let mut field = single(100.0, 100.0);
        field.pointer_moved(110.0, 100.0);
        field.tick(0.0);

        let p = &field.particles()[0];
        assert!(p.vx < 0.0, "particle should be pushed away from the pointer");
        assert_eq!(p.tint, Tint::Active);
        assert_eq!(field.color_of(p), "#8b5cf6");
    }

    #[test]
    fn test_spring_returns_to_base() {
        let mut field = single(100.0, 100.0);
        field.particles[0].x = 120.0;

        for frame in 0..400 {
            field.pointer_moved(-1000.0, -1000.0);
            field.tick(frame as f64 * 16.0);
        }

        let p = &field.particles()[0];
        assert!((p.x - 100.0).abs() < 0.5);
        assert_eq!(p.tint, Tint::Resting);
        assert_eq!(field.color_of(p), "#333333");
    }

    #[test]
    fn test_blast_radius_eases_out() {
        let blast = Blast::new(0.0, 0.0, 100.0, 1000.0);
        assert_eq!(blast.radius_at(1000.0), 0.0);
        assert_eq!(blast.radius_at(1090.0), 75.0);
        assert_eq!(blast.radius_at(1180.0), 100.0);
        assert_eq!(blast.radius_at(5000.0), 100.0);
    }

    #[test]
    fn test_blast_expires_after_linger() {
        let blast = Blast::new(0.0, 0.0, 100.0, 0.0);
        assert!(blast.is_active(200.0));
        assert!(!blast.is_active(BLAST_EXPAND_MS + BLAST_LINGER_MS));
    }

    #[test]
    fn test_blast_pushes_particles_outwards() {
        let mut field = single(50.0, 0.0);
        field.trigger_blast(0.0, 0.0, 0.0);
        field.tick(BLAST_EXPAND_MS);

        let p = &field.particles()[0];
        assert!(p.vx > 0.0);
        assert_eq!(p.tint, Tint::Blast);
        assert_eq!(field.color_of(p), BLAST_COLOR);
    }

    #[test]
    fn test_expired_blast_is_dropped() {
        let mut field = single(50.0, 0.0);
        field.trigger_blast(0.0, 0.0, 0.0);
        field.pointer_moved(-1000.0, -1000.0);
        field.tick(1000.0);
        assert!(field.blast().is_none());
    }
}
