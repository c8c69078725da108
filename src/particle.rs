// Simple particle struct to keep track of individual position, velocity, and radius

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniform position inside the surface, uniform velocity in
    // [-max_speed, max_speed] per axis, uniform radius in [min_radius, max_radius]
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let radius = config.min_radius + rng.gen::<f64>() * (config.max_radius - config.min_radius);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // Moves by one frame of velocity, then reverses any axis that ended up
    // outside [0, bound] while still heading away from it. Position is never
    // clamped, so an overshooting particle drifts back in over the following
    // frames.
    //
    // Deliberately not the bare "outside, so flip" rule: that one flips again
    // on every frame a particle spends outside, and a particle stranded by a
    // shrink then jitters in place beyond the edge forever.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let bounds = [width, height];
        for axis in 0..2 {
            let p = self.pos[axis];
            let v = self.vel[axis];
            if (p < 0.0 && v < 0.0) || (p > bounds[axis] && v > 0.0) {
                self.vel[axis] = -v;
            }
        }
    }

    pub fn distance_squared(&self, other: &Particle) -> f64 {
        vecmath::vec2_square_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
