//! The debris pool and its per-frame pass

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision;
use super::debris::Debris;
use super::fish::Fish;
use crate::consts::*;

/// Outcome of one field pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldReport {
    /// Lives lost this pass
    pub hits: u32,
    /// Any debris on a collision course (drives the danger cue)
    pub inbound: bool,
    /// The fish lost its last life during this pass
    pub fish_died: bool,
    /// Entities recycled for leaving the field (not counting hits)
    pub recycled: u32,
}

/// Fixed pool of debris plus the shared drift rate.
///
/// The pool is allocated once; respawning overwrites a slot in place.
#[derive(Debug, Clone)]
pub struct DebrisField {
    slots: Box<[Debris]>,
    /// Shared drift rate; grows every frame so debris accelerates over time
    wave_period: f32,
    start_wave_period: f32,
    inbound: bool,
    rng: Pcg32,
}

impl DebrisField {
    pub fn new(count: usize, seed: u64) -> Self {
        Self::with_wave_period(count, seed, DEFAULT_WAVE_PERIOD)
    }

    pub fn with_wave_period(count: usize, seed: u64, start_wave_period: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let slots = (0..count)
            .map(|_| Debris::spawned(RESET_SPAWN_DEPTH, &mut rng))
            .collect();
        Self {
            slots,
            wave_period: start_wave_period,
            start_wave_period,
            inbound: false,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn debris(&self) -> &[Debris] {
        &self.slots
    }

    /// Direct slot access (for scripted placement)
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Debris> {
        self.slots.get_mut(index)
    }

    pub fn wave_period(&self) -> f32 {
        self.wave_period
    }

    /// Any debris was inbound during the last pass
    pub fn inbound(&self) -> bool {
        self.inbound
    }

    /// Grow the shared drift rate by one frame's worth
    pub fn accelerate(&mut self, dt: f32) {
        self.wave_period += dt;
    }

    /// Respawn every slot far away and restore the starting drift rate
    pub fn reset(&mut self) {
        for debris in self.slots.iter_mut() {
            debris.respawn(RESET_SPAWN_DEPTH, &mut self.rng);
        }
        self.wave_period = self.start_wave_period;
        self.inbound = false;
    }

    /// Run one frame over the pool in slot order.
    ///
    /// Each entity is advanced, recycled if it left the field, then tested
    /// against the fish. A hit inside the impact window costs a life when
    /// `damage_enabled` and respawns that entity at once so it cannot hit
    /// twice.
    pub fn update(&mut self, dt: f32, time: f32, fish: &mut Fish, damage_enabled: bool) -> FieldReport {
        let mut report = FieldReport::default();
        for debris in self.slots.iter_mut() {
            debris.advance(dt, self.wave_period, time);

            if debris.needs_recycle() {
                debris.respawn(SPAWN_DISTANCE, &mut self.rng);
                report.recycled += 1;
            }

            if !fish.check_collision(debris) {
                continue;
            }
            report.inbound = true;

            if collision::in_impact_window(debris.depth) && damage_enabled && !fish.is_dead() {
                report.hits += 1;
                if fish.take_hit() {
                    report.fish_died = true;
                }
                log::debug!(
                    "Hit by {:?} at depth {:.2}, {} lives left",
                    debris.kind,
                    debris.depth,
                    fish.lives
                );
                debris.respawn(SPAWN_DISTANCE, &mut self.rng);
            }
        }

        self.inbound = report.inbound;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::debris::DebrisKind;

    /// Field with every slot parked far away except slot 0
    fn field_with_one_at(depth: f32, horz: f32, vert: f32) -> DebrisField {
        let mut field = DebrisField::new(4, 1);
        for i in 0..field.len() {
            let slot = field.slot_mut(i).unwrap();
            slot.depth = 5000.0;
        }
        let slot = field.slot_mut(0).unwrap();
        *slot = Debris {
            depth,
            horz,
            vert,
            kind: DebrisKind::Mine,
            ..Default::default()
        };
        field
    }

    #[test]
    fn test_pool_size_fixed() {
        let mut field = DebrisField::new(DEBRIS_COUNT, 3);
        let mut fish = Fish::default();
        for _ in 0..200 {
            field.update(0.05, 1.0, &mut fish, false);
        }
        assert_eq!(field.len(), DEBRIS_COUNT);
    }

    #[test]
    fn test_initial_spawn_is_far() {
        let field = DebrisField::new(DEBRIS_COUNT, 9);
        assert!(field.debris().iter().all(|d| d.depth >= RESET_SPAWN_DEPTH));
        assert_eq!(field.wave_period(), DEFAULT_WAVE_PERIOD);
    }

    #[test]
    fn test_impact_costs_one_life_and_respawns() {
        let mut field = field_with_one_at(-1.0, 0.0, 0.0);
        let mut fish = Fish::default();

        let report = field.update(0.01, 10.0, &mut fish, true);

        assert_eq!(report.hits, 1);
        assert!(report.inbound);
        assert_eq!(fish.lives, MAX_LIVES - 1);
        assert!(field.debris()[0].depth >= SPAWN_DISTANCE);
    }

    #[test]
    fn test_no_damage_during_grace() {
        let mut field = field_with_one_at(-1.0, 0.0, 0.0);
        let mut fish = Fish::default();

        let report = field.update(0.01, 1.0, &mut fish, false);

        assert_eq!(report.hits, 0);
        assert!(report.inbound);
        assert_eq!(fish.lives, MAX_LIVES);
        assert!(field.debris()[0].depth < 0.0);
    }

    #[test]
    fn test_inbound_without_impact() {
        let mut field = field_with_one_at(6.0, 0.5, 0.5);
        let mut fish = Fish::default();

        let report = field.update(0.01, 10.0, &mut fish, true);

        assert!(report.inbound);
        assert!(field.inbound());
        assert_eq!(report.hits, 0);
    }

    #[test]
    fn test_multiple_hits_accumulate_in_pool_order() {
        let mut field = DebrisField::new(3, 5);
        for i in 0..3 {
            *field.slot_mut(i).unwrap() = Debris {
                depth: -1.0,
                ..Default::default()
            };
        }
        let mut fish = Fish::default();

        let report = field.update(0.01, 10.0, &mut fish, true);

        assert_eq!(report.hits, 3);
        assert!(report.fish_died);
        assert_eq!(fish.lives, 0);
    }

    #[test]
    fn test_dead_fish_takes_no_more_hits() {
        let mut field = DebrisField::new(5, 5);
        for i in 0..5 {
            *field.slot_mut(i).unwrap() = Debris {
                depth: -1.0,
                ..Default::default()
            };
        }
        let mut fish = Fish::default();

        let report = field.update(0.01, 10.0, &mut fish, true);

        assert_eq!(report.hits, u32::from(MAX_LIVES));
        assert_eq!(fish.lives, 0);
    }

    #[test]
    fn test_reset_restores_drift_and_depths() {
        let mut field = DebrisField::new(50, 11);
        let mut fish = Fish::default();
        for _ in 0..100 {
            field.update(0.05, 1.0, &mut fish, false);
            field.accelerate(0.05);
        }
        assert!(field.wave_period() > DEFAULT_WAVE_PERIOD);

        field.reset();

        assert_eq!(field.wave_period(), DEFAULT_WAVE_PERIOD);
        assert!(field.debris().iter().all(|d| d.depth >= RESET_SPAWN_DEPTH));
        assert!(!field.inbound());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = DebrisField::new(20, 77);
        let b = DebrisField::new(20, 77);
        assert_eq!(a.debris(), b.debris());
    }
}
