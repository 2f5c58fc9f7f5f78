//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. Motion rules are methods on
//! the entities they move; the per-tick update order is orchestrated in
//! [`crate::sim::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SimConfig};
use crate::consts::*;

/// Which way the ship keeps drifting when no lateral key is held.
///
/// Latched on the last left/right key-down edge. `None` only before the
/// first press and after a crash reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LateralDirection {
    Left,
    Right,
    #[default]
    None,
}

/// Visual state tag for the renderer, mirroring the held lateral input.
/// Left wins when both keys are down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Attitude {
    TurningLeft,
    TurningRight,
    #[default]
    Neutral,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play, ship is collidable
    Flying,
    /// Post-crash invulnerability window
    Crashed,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// x is the horizontal center of the hull, y its top edge
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Climb/glide speed along the vertical axis
    pub vertical_speed: f32,
    /// Decaying lateral velocity magnitude
    pub lateral_float: f32,
    pub lateral_direction: LateralDirection,
    /// Renderer tags, refreshed every frame tick
    pub attitude: Attitude,
    pub thrusting: bool,
}

impl Ship {
    /// Ship at its spawn pose: horizontally centered, two hull-heights above
    /// the canvas bottom, at rest.
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.canvas_width / 2.0 - SHIP_WIDTH / 2.0,
                config.canvas_height - SHIP_HEIGHT * 2.0,
            ),
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            vertical_speed: 0.0,
            lateral_float: 0.0,
            lateral_direction: LateralDirection::None,
            attitude: Attitude::Neutral,
            thrusting: false,
        }
    }

    /// Rest altitude: the lowest allowed y for the hull top.
    #[inline]
    pub fn floor_y(&self, config: &SimConfig) -> f32 {
        config.canvas_height - self.height * 2.0
    }

    /// Advance the vertical axis by one tick.
    ///
    /// Ground contact zeroes the speed before the thrust/glide integration,
    /// so a landed ship sits at rest instead of being held at the glide
    /// floor. The hull top always ends the tick inside
    /// `[height, canvas_height - 2 * height]`.
    pub fn update_vertical(&mut self, thrust: bool, config: &SimConfig) {
        let floor = self.floor_y(config);
        if self.pos.y >= floor {
            self.vertical_speed = 0.0;
        }

        if thrust && self.pos.y > self.height {
            self.vertical_speed += THRUST_ACCEL;
            self.pos.y -= self.vertical_speed;
        } else if !thrust && self.vertical_speed > 0.0 {
            self.vertical_speed = (self.vertical_speed - GLIDE_DECAY).max(GLIDE_FLOOR);
            self.pos.y += self.vertical_speed;
        }

        self.pos.y = self.pos.y.clamp(self.height, floor);
    }

    /// Advance the lateral axis by one tick.
    ///
    /// Left and right accelerate asymmetrically (left is the heavier turn).
    /// With neither key held the ship keeps coasting toward the last latched
    /// direction at a decaying, floored rate. `x` is not clamped: drifting
    /// past an edge just disables further movement that way until the player
    /// steers back.
    pub fn update_lateral(&mut self, left: bool, right: bool, config: &SimConfig) {
        let right_bound = config.canvas_width - self.width * 1.5;

        if left && self.pos.x > self.width {
            self.lateral_float = (self.lateral_float + LEFT_ACCEL).min(FLOAT_MAX);
            self.pos.x -= self.lateral_float;
        }
        if right && self.pos.x < right_bound {
            self.lateral_float = (self.lateral_float + RIGHT_ACCEL).min(FLOAT_MAX);
            self.pos.x += self.lateral_float;
        }
        if !left
            && !right
            && self.lateral_float > 0.0
            && self.pos.x > self.width
            && self.pos.x < right_bound
        {
            self.lateral_float = (self.lateral_float - FLOAT_DECAY).max(FLOAT_FLOOR);
            match self.lateral_direction {
                LateralDirection::Left => self.pos.x -= self.lateral_float,
                LateralDirection::Right => self.pos.x += self.lateral_float,
                LateralDirection::None => {}
            }
        }
    }
}

/// A descending missile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    /// x is the horizontal center, y the nose; the body extends upward
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Per-missile fall rate, scaled by the global difficulty multiplier
    pub fall_speed: u8,
}

impl Missile {
    /// New missile parked above the visible area on a random grid column.
    pub fn spawn(rng: &mut Pcg32, config: &SimConfig) -> Self {
        let mut missile = Self {
            pos: Vec2::new(0.0, -MISSILE_HEIGHT),
            width: MISSILE_WIDTH,
            height: MISSILE_HEIGHT,
            fall_speed: FALL_SPEED_MIN,
        };
        missile.randomize(rng, config);
        missile
    }

    /// Redraw the random spawn parameters: grid-aligned column, fresh fall
    /// rate, nose parked one body-height above the canvas.
    fn randomize(&mut self, rng: &mut Pcg32, config: &SimConfig) {
        let columns = (config.canvas_width / SPAWN_GRID) as u32;
        self.pos.x = rng.random_range(0..columns) as f32 * SPAWN_GRID + self.width;
        self.pos.y = -self.height;
        self.fall_speed = rng.random_range(FALL_SPEED_MIN..=FALL_SPEED_MAX);
    }

    /// Advance the fall by one frame tick.
    pub fn fall(&mut self, difficulty: f32) {
        self.pos.y += difficulty * self.fall_speed as f32;
    }

    /// True once the whole body has passed the canvas bottom.
    pub fn below_canvas(&self, config: &SimConfig) -> bool {
        self.pos.y > config.canvas_height + self.height
    }

    /// Send the missile back to the top with a fresh column and speed.
    pub fn recycle(&mut self, rng: &mut Pcg32, config: &SimConfig) {
        self.randomize(rng, config);
    }
}

/// Complete game state, deterministic up to the seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn-jitter RNG; rebuilt detached on deserialize
    #[serde(skip, default = "detached_rng")]
    pub(crate) rng: Pcg32,
    /// Monotonic frame-tick counter
    pub frame: u64,
    /// Seconds counter, driven only by the 1 Hz tick
    pub elapsed_seconds: u64,
    /// Global fall multiplier read by every missile update
    pub difficulty: f32,
    pub collision_count: u32,
    pub last_crash_frame: u64,
    pub phase: GamePhase,
    pub ship: Ship,
    pub missiles: Vec<Missile>,
    pub config: SimConfig,
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create a new game: validates the config, places the ship at its spawn
    /// pose and seeds the initial missile wave.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let ship = Ship::spawn(&config);
        let missiles = (0..config.initial_missiles)
            .map(|_| Missile::spawn(&mut rng, &config))
            .collect();
        log::info!(
            "new game: seed {seed}, {} initial missiles",
            config.initial_missiles
        );

        Ok(Self {
            seed,
            rng,
            frame: 0,
            elapsed_seconds: 0,
            difficulty: BASE_DIFFICULTY,
            collision_count: 0,
            last_crash_frame: 0,
            phase: GamePhase::Flying,
            ship,
            missiles,
            config,
        })
    }

    /// True while the post-crash invulnerability window is active.
    #[inline]
    pub fn invulnerable(&self) -> bool {
        self.phase == GamePhase::Crashed
    }

    /// Frame at which the current cooldown ends.
    #[inline]
    pub fn respawn_frame(&self) -> u64 {
        self.last_crash_frame + self.config.cooldown_ticks()
    }

    /// Seconds left on the respawn countdown, zero outside the window.
    pub fn respawn_countdown(&self) -> f32 {
        match self.phase {
            GamePhase::Flying => 0.0,
            GamePhase::Crashed => {
                self.respawn_frame().saturating_sub(self.frame) as f32 / self.config.tick_rate as f32
            }
        }
    }

    /// Append one missile to the active wave.
    pub fn spawn_missile(&mut self) {
        let missile = Missile::spawn(&mut self.rng, &self.config);
        self.missiles.push(missile);
    }

    /// Flying -> Crashed: count the hit, restart the difficulty ramp, put
    /// the ship back on its spawn pose and trim the missile wave down to the
    /// starting population. Missiles beyond that index are dropped, not
    /// repositioned.
    pub(crate) fn crash(&mut self) {
        self.collision_count += 1;
        self.last_crash_frame = self.frame;
        self.phase = GamePhase::Crashed;
        self.difficulty = BASE_DIFFICULTY;
        self.elapsed_seconds = 0;
        self.ship = Ship::spawn(&self.config);
        self.missiles.truncate(self.config.initial_missiles);
        log::info!(
            "crash #{} at frame {}, respawn in {:.1}s",
            self.collision_count,
            self.frame,
            self.config.respawn_seconds
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        GameState::new(SimConfig::default(), 12345).unwrap()
    }

    #[test]
    fn ship_spawns_at_rest_above_canvas_bottom() {
        let ship = Ship::spawn(&SimConfig::default());
        assert_eq!(ship.pos.x, 290.0);
        assert_eq!(ship.pos.y, 540.0);
        assert_eq!(ship.vertical_speed, 0.0);
        assert_eq!(ship.lateral_float, 0.0);
        assert_eq!(ship.lateral_direction, LateralDirection::None);
    }

    #[test]
    fn thrust_accelerates_climb() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.pos.y = 400.0;

        ship.update_vertical(true, &config);
        assert!((ship.vertical_speed - 0.1).abs() < 1e-6);
        assert!((ship.pos.y - 399.9).abs() < 1e-4);

        ship.update_vertical(true, &config);
        assert!((ship.vertical_speed - 0.2).abs() < 1e-6);
        assert!((ship.pos.y - 399.7).abs() < 1e-4);
    }

    #[test]
    fn glide_decays_toward_floor_speed() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.pos.y = 300.0;
        ship.vertical_speed = 0.71;

        ship.update_vertical(false, &config);
        assert!((ship.vertical_speed - 0.703).abs() < 1e-6);

        // Decay never crosses the floor
        for _ in 0..10 {
            ship.update_vertical(false, &config);
        }
        assert!((ship.vertical_speed - GLIDE_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn ground_contact_zeroes_vertical_speed() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.vertical_speed = 5.0;

        // On the floor: speed snaps to rest, not to the glide floor
        ship.update_vertical(false, &config);
        assert_eq!(ship.vertical_speed, 0.0);
        assert_eq!(ship.pos.y, ship.floor_y(&config));
    }

    #[test]
    fn climb_is_clamped_at_the_ceiling() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.pos.y = ship.height + 1.0;
        ship.vertical_speed = 10.0;

        ship.update_vertical(true, &config);
        assert_eq!(ship.pos.y, ship.height);
    }

    #[test]
    fn left_turn_is_heavier_than_right() {
        let config = SimConfig::default();

        let mut ship = Ship::spawn(&config);
        ship.update_lateral(true, false, &config);
        let left_float = ship.lateral_float;

        let mut ship = Ship::spawn(&config);
        ship.update_lateral(false, true, &config);
        let right_float = ship.lateral_float;

        assert!((left_float - LEFT_ACCEL).abs() < 1e-6);
        assert!((right_float - RIGHT_ACCEL).abs() < 1e-6);
        assert!(left_float < right_float);
    }

    #[test]
    fn lateral_float_caps_at_four() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.pos.x = config.canvas_width / 2.0;

        for _ in 0..100 {
            ship.update_lateral(false, true, &config);
            // Re-center so the edge guard never kicks in
            ship.pos.x = config.canvas_width / 2.0;
        }
        assert_eq!(ship.lateral_float, FLOAT_MAX);

        for _ in 0..200 {
            ship.update_lateral(true, false, &config);
            ship.pos.x = config.canvas_width / 2.0;
        }
        assert_eq!(ship.lateral_float, FLOAT_MAX);
    }

    #[test]
    fn coasting_drifts_toward_latched_direction() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.lateral_float = 1.0;
        ship.lateral_direction = LateralDirection::Left;
        let x0 = ship.pos.x;

        ship.update_lateral(false, false, &config);
        assert!(ship.pos.x < x0);
        assert!((ship.lateral_float - 0.97).abs() < 1e-6);

        // Coasting decay floors at FLOAT_FLOOR
        for _ in 0..50 {
            ship.update_lateral(false, false, &config);
        }
        assert!((ship.lateral_float - FLOAT_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn coasting_with_no_latched_direction_stays_put() {
        let config = SimConfig::default();
        let mut ship = Ship::spawn(&config);
        ship.lateral_float = 1.0;
        let x0 = ship.pos.x;

        ship.update_lateral(false, false, &config);
        assert_eq!(ship.pos.x, x0);
    }

    #[test]
    fn missile_spawns_on_grid_above_canvas() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..50 {
            let missile = Missile::spawn(&mut rng, &config);
            assert_eq!(missile.pos.y, -MISSILE_HEIGHT);
            assert!((FALL_SPEED_MIN..=FALL_SPEED_MAX).contains(&missile.fall_speed));
            let column = (missile.pos.x - missile.width) / SPAWN_GRID;
            assert_eq!(column.fract(), 0.0);
            assert!(missile.pos.x + missile.width / 2.0 <= config.canvas_width);
        }
    }

    #[test]
    fn missile_fall_scales_with_difficulty() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut missile = Missile::spawn(&mut rng, &config);
        missile.fall_speed = 4;

        missile.fall(0.3);
        assert!((missile.pos.y - (-MISSILE_HEIGHT + 1.2)).abs() < 1e-4);
        missile.fall(0.5);
        assert!((missile.pos.y - (-MISSILE_HEIGHT + 3.2)).abs() < 1e-4);
    }

    #[test]
    fn missile_recycles_to_spawn_shape() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut missile = Missile::spawn(&mut rng, &config);

        missile.pos.y = config.canvas_height + missile.height + 1.0;
        assert!(missile.below_canvas(&config));

        missile.recycle(&mut rng, &config);
        assert_eq!(missile.pos.y, -MISSILE_HEIGHT);
        assert!((FALL_SPEED_MIN..=FALL_SPEED_MAX).contains(&missile.fall_speed));
        assert!(!missile.below_canvas(&config));
    }

    #[test]
    fn new_game_seeds_initial_wave() {
        let state = test_state();
        assert_eq!(state.missiles.len(), INITIAL_MISSILES);
        assert_eq!(state.phase, GamePhase::Flying);
        assert_eq!(state.difficulty, BASE_DIFFICULTY);
        assert_eq!(state.frame, 0);
        assert!(!state.invulnerable());
    }

    #[test]
    fn new_game_rejects_invalid_config() {
        let config = SimConfig {
            canvas_width: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn crash_resets_run_state() {
        let mut state = test_state();
        state.frame = 500;
        state.elapsed_seconds = 45;
        state.difficulty = 0.4;
        state.ship.pos.x = 100.0;
        state.spawn_missile();
        state.spawn_missile();
        assert_eq!(state.missiles.len(), INITIAL_MISSILES + 2);

        state.crash();

        assert_eq!(state.collision_count, 1);
        assert_eq!(state.last_crash_frame, 500);
        assert_eq!(state.phase, GamePhase::Crashed);
        assert_eq!(state.difficulty, BASE_DIFFICULTY);
        assert_eq!(state.elapsed_seconds, 0);
        assert_eq!(state.missiles.len(), INITIAL_MISSILES);
        assert_eq!(state.ship.pos.x, 290.0);
        assert_eq!(state.ship.pos.y, 540.0);
    }

    #[test]
    fn same_seed_spawns_identical_waves() {
        let a = test_state();
        let b = test_state();
        for (left, right) in a.missiles.iter().zip(&b.missiles) {
            assert_eq!(left.pos, right.pos);
            assert_eq!(left.fall_speed, right.fall_speed);
        }
    }
}
