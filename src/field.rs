// The particle backdrop: a fixed population of drifting points joined by
// faint lines when they come close, advanced one frame per tick.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::renderer::Surface;
use rand::Rng;

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    config: FieldConfig,
    suspended: bool,
    particle_style: String,
}

impl ParticleField {
    // Sizes the surface to the viewport and scatters `config.particle_count`
    // random particles over it.
    pub fn new<S: Surface, R: Rng + ?Sized>(
        surface: &mut S,
        width: u32,
        height: u32,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        surface.resize(width, height);
        let (w, h) = (width as f64, height as f64);
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, w, h, &config))
            .collect();
        ParticleField::with_particles(particles, width, height, config)
    }

    // Builds a field from known particles without touching a surface
    pub fn with_particles(
        particles: Vec<Particle>,
        width: u32,
        height: u32,
        config: FieldConfig,
    ) -> ParticleField {
        let particle_style = config
            .particle_color
            .to_css_with_alpha(config.particle_alpha);
        ParticleField {
            particles,
            width: width as f64,
            height: height as f64,
            config,
            suspended: false,
            particle_style,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    // Adopts new viewport dimensions. Resizing the backing store clears it;
    // particles keep their positions and find their way back through
    // reflection if they now sit outside.
    pub fn resize<S: Surface>(&mut self, surface: &mut S, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
        surface.resize(width, height);
    }

    // One frame: clear, then (unless suspended) move, draw points, draw links
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear();
        if self.suspended {
            return Ok(());
        }
        self.update();
        self.draw_particles(surface)?;
        self.draw_links(surface)
    }

    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    fn draw_particles<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for p in &self.particles {
            surface.fill_circle(p.pos[0], p.pos[1], p.radius, &self.particle_style)?;
        }
        Ok(())
    }

    fn draw_links<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let max_dist = self.config.link_distance;
        let max_dist_sq = max_dist * max_dist;
        for i in 0..self.particles.len() {
            for j in i + 1..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dist_sq = a.distance_squared(b);
                if dist_sq < max_dist_sq {
                    let alpha = link_alpha(dist_sq.sqrt(), max_dist, self.config.link_alpha_scale);
                    let style = self.config.link_color.to_css_with_alpha(alpha);
                    surface.stroke_line(a.pos, b.pos, &style)?;
                }
            }
        }
        Ok(())
    }
}

// Opacity of the line joining two particles `distance` apart. Linear falloff
// from `scale` at zero distance to nothing at `max_distance` and beyond.
pub fn link_alpha(distance: f64, max_distance: f64, scale: f64) -> f64 {
    if distance >= max_distance {
        return 0.0;
    }
    (1.0 - distance / max_distance) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_of(particles: Vec<Particle>, width: u32, height: u32) -> ParticleField {
        ParticleField::with_particles(particles, width, height, FieldConfig::default())
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0)
    }

    #[test]
    fn new_sizes_surface_and_fills_population() {
        let mut surface = RecordingSurface::new(0, 0);
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::new(&mut surface, 1280, 720, FieldConfig::default(), &mut rng);
        assert_eq!(field.particles().len(), 40);
        assert_eq!(field.size(), (1280.0, 720.0));
        assert_eq!(surface.calls, vec![DrawCall::Resize(1280, 720)]);
        assert!(!field.is_suspended());
    }

    #[test]
    fn close_pair_gets_line_with_linear_alpha() {
        let mut field = field_of(vec![still(0.0, 0.0), still(50.0, 0.0)], 500, 500);
        let mut surface = RecordingSurface::new(500, 500);
        field.tick(&mut surface).unwrap();

        let lines = surface.lines();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            DrawCall::Line { from, to, style } => {
                assert_eq!(*from, [0.0, 0.0]);
                assert_eq!(*to, [50.0, 0.0]);
                // 0.6 * (1 - 50/120) = 0.35
                assert_eq!(style, "rgba(51,153,255,0.350)");
            }
            _ => unreachable!(),
        }
        assert!((link_alpha(50.0, 120.0, 0.6) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn distant_pair_gets_no_line() {
        let mut field = field_of(vec![still(0.0, 0.0), still(200.0, 0.0)], 500, 500);
        let mut surface = RecordingSurface::new(500, 500);
        field.tick(&mut surface).unwrap();
        assert!(surface.lines().is_empty());
        assert_eq!(surface.circles(), 2);
    }

    #[test]
    fn pair_exactly_at_threshold_gets_no_line() {
        let mut field = field_of(vec![still(0.0, 0.0), still(120.0, 0.0)], 500, 500);
        let mut surface = RecordingSurface::new(500, 500);
        field.tick(&mut surface).unwrap();
        assert!(surface.lines().is_empty());
        assert_eq!(link_alpha(120.0, 120.0, 0.6), 0.0);
        assert_eq!(link_alpha(500.0, 120.0, 0.6), 0.0);
    }

    #[test]
    fn line_alpha_uses_true_distance() {
        // 3-4-5 triangle scaled: d = 100, squared 10000
        let alpha = link_alpha((60.0f64 * 60.0 + 80.0 * 80.0).sqrt(), 120.0, 0.6);
        assert!((alpha - 0.6 * (1.0 - 100.0 / 120.0)).abs() < 1e-12);
        assert!(alpha > 0.0 && alpha < 0.6);
    }

    #[test]
    fn every_close_pair_is_linked_once() {
        // Three points within range of each other and one far away
        let particles = vec![
            still(10.0, 10.0),
            still(20.0, 10.0),
            still(10.0, 20.0),
            still(400.0, 400.0),
        ];
        let mut field = field_of(particles, 500, 500);
        let mut surface = RecordingSurface::new(500, 500);
        field.tick(&mut surface).unwrap();
        assert_eq!(surface.lines().len(), 3);
        assert_eq!(surface.circles(), 4);
    }

    #[test]
    fn tick_clears_first_and_draws_fixed_fill() {
        let mut field = field_of(vec![Particle::new(5.0, 5.0, 1.0, 0.0, 2.0)], 100, 100);
        let mut surface = RecordingSurface::new(100, 100);
        field.tick(&mut surface).unwrap();
        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::Circle {
                    x: 6.0,
                    y: 5.0,
                    radius: 2.0,
                    style: "rgba(51,153,255,0.750)".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn suspended_tick_only_clears() {
        let start = vec![Particle::new(5.0, 5.0, 1.0, 1.0, 2.0), still(10.0, 5.0)];
        let mut field = field_of(start.clone(), 100, 100);
        field.set_suspended(true);
        field.set_suspended(true);
        assert!(field.is_suspended());

        let mut surface = RecordingSurface::new(100, 100);
        field.tick(&mut surface).unwrap();
        field.tick(&mut surface).unwrap();
        assert_eq!(surface.calls, vec![DrawCall::Clear, DrawCall::Clear]);
        assert_eq!(field.particles(), &start[..]);

        field.set_suspended(false);
        field.tick(&mut surface).unwrap();
        assert_eq!(field.particles()[0].pos, [6.0, 6.0]);
    }

    #[test]
    fn out_of_range_particle_reflects_on_next_tick() {
        let mut field = field_of(vec![Particle::new(105.0, 50.0, 0.2, 0.0, 1.0)], 100, 100);
        let mut surface = RecordingSurface::new(100, 100);
        field.tick(&mut surface).unwrap();
        assert_eq!(field.particles()[0].vel[0], -0.2);
        let x = field.particles()[0].pos[0];
        field.tick(&mut surface).unwrap();
        assert!(field.particles()[0].pos[0] < x);
    }

    #[test]
    fn resize_updates_bounds_without_moving_particles() {
        let mut field = field_of(vec![still(700.0, 500.0)], 800, 600);
        let mut surface = RecordingSurface::new(800, 600);
        field.resize(&mut surface, 300, 200);
        assert_eq!(field.size(), (300.0, 200.0));
        assert_eq!(field.particles()[0].pos, [700.0, 500.0]);
        assert_eq!(surface.calls, vec![DrawCall::Resize(300, 200)]);
    }

    #[test]
    fn positions_stay_finite_over_many_ticks() {
        let mut surface = RecordingSurface::new(0, 0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(&mut surface, 640, 480, FieldConfig::default(), &mut rng);
        for frame in 0..20_000 {
            if frame == 5_000 {
                field.resize(&mut surface, 200, 150);
            }
            field.update();
        }
        for p in field.particles() {
            assert!(p.pos[0].is_finite() && p.pos[1].is_finite());
            assert!(p.vel[0].abs() <= 0.125 && p.vel[1].abs() <= 0.125);
        }
    }

    #[test]
    fn speeds_and_radii_never_change() {
        let mut surface = RecordingSurface::new(0, 0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(&mut surface, 300, 300, FieldConfig::default(), &mut rng);
        let before: Vec<Particle> = field.particles().to_vec();
        for _ in 0..10_000 {
            field.update();
        }
        for (a, b) in before.iter().zip(field.particles()) {
            assert_eq!(a.radius, b.radius);
            assert_eq!(a.vel[0].abs(), b.vel[0].abs());
            assert_eq!(a.vel[1].abs(), b.vel[1].abs());
        }
        assert_eq!(field.particles().len(), before.len());
    }
}
