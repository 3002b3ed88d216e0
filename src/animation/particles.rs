use std::time::Duration;

use rand::Rng;

use super::ticker::{Animation, Frame};

/// Particles in the default field.
pub const PARTICLE_COUNT: usize = 120;
/// Particles closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 120.0;
/// Pointer repulsion radius.
pub const REPEL_RADIUS: f64 = 240.0;
/// How far past an edge a particle travels before wrapping.
pub const WRAP_MARGIN: f64 = 10.0;

const POINTER_SMOOTHING: f64 = 0.12;
const WANDER_FREQUENCY: f64 = 0.002;
const WANDER_AMPLITUDE: f64 = 0.2;
const HOME_PULL: f64 = 0.01;
const REPEL_STRENGTH: f64 = 0.8;
const REPEL_SCALE: f64 = 0.01;

/// One dot of the particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels.
    pub y: f64,
    /// Drawn radius in pixels.
    pub radius: f64,
    /// Constant horizontal drift per frame.
    pub vx: f64,
    /// Constant vertical drift per frame.
    pub vy: f64,
    /// Horizontal position the particle is pulled back to.
    pub home_x: f64,
    /// Vertical position the particle is pulled back to.
    pub home_y: f64,
}

impl Particle {
    /// A particle whose home is its starting position.
    pub fn new(x: f64, y: f64, radius: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, radius, vx, vy, home_x: x, home_y: y }
    }
}

/// A line between two particles, fading with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle.
    pub from: usize,
    /// Index of the second particle.
    pub to: usize,
    /// Line opacity, 1 when touching and 0 at [`LINK_DISTANCE`].
    pub opacity: f64,
}

/// The decorative background: drifting particles pushed away by the pointer.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    // normalized 0..1
    pointer_target: (f64, f64),
    pointer: (f64, f64),
}

impl ParticleField {
    /// A field of `width` by `height` pixels with the pointer centred.
    pub fn new(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self { width, height, particles, pointer_target: (0.5, 0.5), pointer: (0.5, 0.5) }
    }

    /// Scatters `count` particles over the canvas.
    pub fn random<R: Rng>(width: f64, height: f64, count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                Particle::new(
                    rng.gen_range(0.0..width.max(f64::MIN_POSITIVE)),
                    rng.gen_range(0.0..height.max(f64::MIN_POSITIVE)),
                    rng.gen_range(0.5..2.5),
                    rng.gen_range(-0.1..0.1),
                    rng.gen_range(-0.1..0.1),
                )
            })
            .collect();
        Self::new(width, height, particles)
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Changes the canvas size. Homes stay where they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Records a pointer position in canvas pixels.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        if self.width > 0.0 && self.height > 0.0 {
            self.pointer_target = (x / self.width, y / self.height);
        }
    }

    /// Smoothed pointer position in canvas pixels.
    pub fn pointer(&self) -> (f64, f64) {
        (self.pointer.0 * self.width, self.pointer.1 * self.height)
    }

    /// Advances every particle by one frame at time `t` seconds.
    pub fn update(&mut self, t: f64) {
        self.pointer.0 = lerp(self.pointer.0, self.pointer_target.0, POINTER_SMOOTHING);
        self.pointer.1 = lerp(self.pointer.1, self.pointer_target.1, POINTER_SMOOTHING);
        let (mx, my) = self.pointer();
        let (width, height) = (self.width, self.height);

        for p in &mut self.particles {
            let wander_x = (p.home_x * WANDER_FREQUENCY + t).sin() * WANDER_AMPLITUDE;
            let wander_y = (p.home_y * WANDER_FREQUENCY + t).cos() * WANDER_AMPLITUDE;
            let home_x = (p.home_x - p.x) * HOME_PULL;
            let home_y = (p.home_y - p.y) * HOME_PULL;

            let (dx, dy) = (mx - p.x, my - p.y);
            let distance = dx.hypot(dy);
            let (repel_x, repel_y) = if distance < REPEL_RADIUS {
                let push = (REPEL_RADIUS - distance) / REPEL_RADIUS * REPEL_STRENGTH;
                (-dx * push * REPEL_SCALE, -dy * push * REPEL_SCALE)
            } else {
                (0.0, 0.0)
            };

            p.x += p.vx + wander_x + home_x + repel_x;
            p.y += p.vy + wander_y + home_y + repel_y;

            p.x = wrap(p.x, width);
            p.y = wrap(p.y, height);
        }
    }

    /// Pairs of particles within [`LINK_DISTANCE`] of each other.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < LINK_DISTANCE {
                    links.push(Link { from: i, to: j, opacity: 1.0 - distance / LINK_DISTANCE });
                }
            }
        }
        links
    }
}

impl Animation for ParticleField {
    fn tick(&mut self, now: Duration) -> Frame {
        self.update(now.as_secs_f64());
        Frame::Continue
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn wrap(v: f64, extent: f64) -> f64 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_random_field() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::random(800.0, 600.0, PARTICLE_COUNT, &mut rng);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert!(field.particles().iter().all(|p| {
            (0.0..800.0).contains(&p.x)
                && (0.0..600.0).contains(&p.y)
                && (0.5..2.5).contains(&p.radius)
                && p.vx.abs() <= 0.1
        }));
    }

    #[test]
    fn test_particles_stay_within_wrap_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::random(320.0, 240.0, 30, &mut rng);

        for frame in 0..500 {
            field.set_pointer((frame % 320) as f64, (frame % 240) as f64);
            field.update(frame as f64 / 60.0);
        }

        assert!(field.particles().iter().all(|p| {
            p.x >= -WRAP_MARGIN
                && p.x <= 320.0 + WRAP_MARGIN
                && p.y >= -WRAP_MARGIN
                && p.y <= 240.0 + WRAP_MARGIN
        }));
    }

    #[test]
    fn test_pointer_repels_nearby_particle() {
        let particle = Particle::new(100.0, 100.0, 1.0, 0.0, 0.0);
        let mut field = ParticleField::new(200.0, 200.0, vec![particle]);
        // pointer starts centred at (100, 100); move it just left of the particle
        field.pointer = (0.45, 0.5);
        field.pointer_target = (0.45, 0.5);

        // t chosen so the wander term is small: sin(0.2 + t) ~ 0
        field.update(std::f64::consts::PI - 0.2);

        assert!(field.particles()[0].x > 100.0);
    }

    #[test]
    fn test_far_particle_is_not_repelled() {
        let mut field =
            ParticleField::new(2000.0, 2000.0, vec![Particle::new(10.0, 10.0, 1.0, 0.0, 0.0)]);

        field.update(std::f64::consts::PI - 0.02);

        let p = &field.particles()[0];
        assert!((p.x - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-10.5, 100.0), 110.0);
        assert_eq!(wrap(110.5, 100.0), -10.0);
        assert_eq!(wrap(50.0, 100.0), 50.0);
    }

    #[test]
    fn test_pointer_smoothing() {
        let mut field = ParticleField::new(100.0, 100.0, vec![]);
        field.set_pointer(100.0, 0.0);

        field.update(0.0);

        let (x, y) = field.pointer();
        assert!((x - 56.0).abs() < 1e-9);
        assert!((y - 44.0).abs() < 1e-9);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let field = ParticleField::new(
            500.0,
            500.0,
            vec![
                Particle::new(0.0, 0.0, 1.0, 0.0, 0.0),
                Particle::new(60.0, 0.0, 1.0, 0.0, 0.0),
                Particle::new(300.0, 0.0, 1.0, 0.0, 0.0),
            ],
        );

        let links = field.links();

        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from, links[0].to), (0, 1));
        assert!((links[0].opacity - 0.5).abs() < 1e-9);
    }
}
